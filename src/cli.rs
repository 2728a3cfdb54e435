use std::env;
use std::net::SocketAddr;
use std::process;

use chrono::{FixedOffset, Offset, Utc};
use getopts::Options;

use eventboard::DEFAULT_UPSTREAM;

pub struct Args {
    pub address: SocketAddr,
    pub upstream: String,
    pub offset: FixedOffset,
    pub print: bool,
}

fn opts() -> Options {
    let mut opts = Options::new();
    opts.optflag(
        "h",
        "help",
        concat!("Print the help output of ", env!("CARGO_PKG_NAME")),
    );
    opts.optopt(
        "a",
        "address",
        "Socket address (IP and port) to listen on [Default: 127.0.0.1:8080]",
        "SOCKET_ADDRESS",
    );
    opts.optopt(
        "u",
        "upstream",
        "URL of the events API [Default: the class events API]",
        "URL",
    );
    opts.optopt(
        "o",
        "utc-offset",
        "Offset event times are displayed in [Default: +00:00]",
        "OFFSET",
    );
    opts.optflag(
        "p",
        "print",
        "Render the page once to stdout instead of serving it",
    );
    opts
}

pub fn parse(args: Vec<String>) -> Args {
    let opts = opts();

    let matches = match opts.parse(args) {
        Ok(matches) => matches,
        Err(fail) => {
            eprintln!("{fail}");
            process::exit(1);
        }
    };

    if matches.opt_present("help") {
        println!("{}", opts.usage(&opts.short_usage(env!("CARGO_PKG_NAME"))));
        process::exit(0);
    }

    let address = match matches.opt_get_default("address", SocketAddr::from(([127, 0, 0, 1], 8080)))
    {
        Ok(address) => address,
        Err(err) => {
            eprintln!("Provided value for option 'address' is invalid: {err}");
            process::exit(1);
        }
    };

    let upstream = matches
        .opt_str("upstream")
        .unwrap_or_else(|| DEFAULT_UPSTREAM.to_string());

    let offset = match matches.opt_str("utc-offset") {
        None => Utc.fix(),
        Some(raw) => match raw.parse::<FixedOffset>() {
            Ok(offset) => offset,
            Err(err) => {
                eprintln!("Provided value for option 'utc-offset' is invalid: {err}");
                process::exit(1);
            }
        },
    };

    Args {
        address,
        upstream,
        offset,
        print: matches.opt_present("print"),
    }
}
