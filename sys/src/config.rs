

/*
* load config
*/
pub fn load_config(cnfilestr: &str) -> IniObj {

    let cnf_file = Path::new(cnfilestr);

    // check exists
    if ! cnf_file.exists() {
        // error
        println!("[Config Error] Cannot find config file {}", cnfilestr);
        return IniObj::new()
    }

    let cnfilestr = cnf_file.canonicalize().unwrap().to_str().unwrap().to_string();
    println!("[Config] Load: {} {}.", cnfilestr, ctshow());

    // load file
    ini::ini!(&cnfilestr)
}
