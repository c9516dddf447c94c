/// Default configuration file name looked up in the working directory.
pub const CONFIG_FILENAME: &str = "djboot.toml";
