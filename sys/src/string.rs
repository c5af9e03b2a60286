
#[macro_export]
macro_rules! s {
    ($v:expr) => { ($v).to_string() };
}


pub fn trim_split_commas(s: &str) -> Vec<String> {
    s.split(',')
        .map(|a| a.trim().to_string())
        .filter(|a| a.len() > 0)
        .collect()
}
