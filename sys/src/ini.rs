

pub type IniSec = HashMap<String, Option<String>>;
pub type IniObj = HashMap<String, IniSec>;


pub fn ini_section(ini: &IniObj, name: &str) -> IniSec {
    match ini.get(name) {
        Some(sec) => sec.clone(),
        None => IniSec::new(),
    }
}

pub fn ini_must(sec: &IniSec, key: &str, dv: &str) -> String {
    match sec.get(key) {
        Some(Some(v)) if v.len() > 0 => v.clone(),
        _ => s!(dv),
    }
}

pub fn ini_must_u64(sec: &IniSec, key: &str, dv: u64) -> u64 {
    ini_must(sec, key, &dv.to_string()).parse::<u64>().unwrap_or(dv)
}

pub fn ini_must_bool(sec: &IniSec, key: &str, dv: bool) -> bool {
    let v = ini_must(sec, key, maybe!(dv, "true", "false"));
    match v.to_lowercase().as_str() {
        "true" | "yes" | "1" => true,
        "false" | "no" | "0" => false,
        _ => dv,
    }
}

// comma separated list value
pub fn ini_must_list(sec: &IniSec, key: &str) -> Vec<String> {
    trim_split_commas(&ini_must(sec, key, ""))
}
