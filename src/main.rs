fn main() {
    if let Err(err) = bubbleplot::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
