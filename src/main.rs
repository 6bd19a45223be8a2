fn main() {
    std::process::exit(catalog_lib::run());
}
