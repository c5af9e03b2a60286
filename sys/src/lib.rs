use std::collections::HashMap;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

pub type Error = String;

include!{"error.rs"}
include!{"string.rs"}
include!{"hash.rs"}
include!{"time.rs"}
include!{"ini.rs"}
include!{"config.rs"}
include!{"account.rs"}
