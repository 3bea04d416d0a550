fn main() {
    if let Err(e) = cpp_typegen::run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
