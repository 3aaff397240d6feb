//! morse-convert: whole-file text/Morse converter.
//!
//! Thin shell around `morse-convert-core`: parses the three positional
//! arguments, runs the file pipeline, and translates every outcome into a
//! user-facing message. No error escapes as a panic.

mod config;

use std::env;

use morse_convert_core::{convert_file, Error, LogSink};

use config::Request;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() != 3 {
        config::print_usage();
        return;
    }

    let request = match Request::from_args(&args) {
        Ok(request) => request,
        Err(Error::InvalidMode { .. }) => {
            println!("[ERROR] invalid mode; use 'to_morse' or 'to_text'");
            return;
        }
        Err(err) => {
            println!("[ERROR] error during file processing: {}", err);
            return;
        }
    };

    let mut sink = LogSink;
    match convert_file(
        &request.input_file,
        &request.output_file,
        request.mode,
        &mut sink,
    ) {
        Ok(()) => println!(
            "[INFO] conversion result saved to {}.",
            request.output_file.display()
        ),
        Err(Error::InputNotFound { .. }) => println!("[ERROR] input file not found."),
        Err(err) => println!("[ERROR] error during file processing: {}", err),
    }
}
