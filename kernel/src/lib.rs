use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use sys::*;
use protocol::component::*;
use protocol::config::*;
use protocol::interface::*;

include!{"errors.rs"}
include!{"macro.rs"}
include!{"validate.rs"}
include!{"permission.rs"}
include!{"chainlife.rs"}
include!{"params.rs"}
include!{"moddata.rs"}
include!{"kernel.rs"}
