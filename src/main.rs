fn main() {
    clubdirectory_lib::init_logging();

    if let Err(err) = clubdirectory_lib::run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
