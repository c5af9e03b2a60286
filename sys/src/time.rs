use chrono::Local;

pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn curtimes() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0) as u64
}


pub fn ctshow() -> String {
    Local::now().format(TIME_FORMAT).to_string()
}

// process unique mark, used for trash dir names
pub fn uniqid() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    format!("{:x}", nanos)
}
