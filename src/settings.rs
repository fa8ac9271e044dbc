use std::fs;
use std::io::ErrorKind;
use std::io::Write;

#[derive(Debug)]
pub struct ServerSettings {
    pub address: String,
    pub port: u16,
}

impl ServerSettings {
    pub fn new(file: &str) -> Self {
        let default_config: &[u8] = "listen_address: 0.0.0.0,\nlisten_port: 2055".as_bytes();

        let config_result = fs::read_to_string(file);

        let config_string = match config_result {
            Ok(c) => c,
            Err(e) => match e.kind() {
                ErrorKind::NotFound => {
                    let mut temp_file =
                        fs::File::create(file).expect("Unable to create the config file");
                    temp_file
                        .write_all(default_config)
                        .expect("Unable to write the default config");
                    temp_file
                        .sync_all()
                        .expect("Unable to sync io after writing the config");
                    fs::read_to_string(file)
                        .expect("attempted to create and read the config, but failed")
                }
                other_error => {
                    panic!("Problem opening file {other_error:?}");
                }
            },
        };

        parse_config_string(config_string)
    }

    pub fn addr_and_port(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }
}

pub fn parse_config_string(config_string: String) -> ServerSettings {
    let mut settings = ServerSettings {
        address: String::from("0.0.0.0"),
        port: 2055,
    };

    let config_vec: Vec<&str> = config_string.trim().split(',').collect();
    for c in config_vec {
        if c.contains("listen_address") {
            let c2: Vec<&str> = c.split(':').collect();
            if c2.len() == 2 {
                settings.address = c2[1].trim().to_string();
            }
        } else if c.contains("listen_port") {
            let c2: Vec<&str> = c.split(':').collect();
            if c2.len() == 2 {
                settings.port = c2[1].trim().parse().unwrap_or(2055);
            }
        }
    }

    settings
}
