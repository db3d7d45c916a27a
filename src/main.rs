fn main() {
    if let Err(e) = clingboot::run() {
        eprintln!("clingboot: {e:#}");
        std::process::exit(1);
    }
}
