// src/banner.rs

/// Prints the application startup banner to the console.
pub fn print_banner() {
    let banner = r#"
 _            _                                          
| |_ ___  ___| |_ ___ __ _ ___  ___      __ _  ___ _ __  
| __/ _ \/ __| __/ __/ _` / __|/ _ \___ / _` |/ _ \ '_ \ 
| ||  __/\__ \ || (_| (_| \__ \  __/___| (_| |  __/ | | |
 \__\___||___/\__\___\__,_|___/\___|    \__, |\___|_| |_|
                                        |___/            

    Requirements in, manual test cases out
"#;
    println!("{}", banner);
}
