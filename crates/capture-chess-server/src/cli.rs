use clap::Parser;

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "capture-chess-server")]
#[command(about = "HTTP API for a single capture-bonus chess match")]
pub struct Args {
    /// HTTP API listen address.
    #[arg(long, env = "LISTEN_ADDR", default_value = "0.0.0.0:5001")]
    pub listen_addr: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_listen_addr() {
        let args = Args::try_parse_from(["capture-chess-server"]).unwrap();
        assert_eq!(args.listen_addr, "0.0.0.0:5001");
    }

    #[test]
    fn listen_addr_flag() {
        let args =
            Args::try_parse_from(["capture-chess-server", "--listen-addr", "127.0.0.1:8080"])
                .unwrap();
        assert_eq!(args.listen_addr, "127.0.0.1:8080");
    }
}
