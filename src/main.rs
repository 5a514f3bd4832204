fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    mandelzoom::run_gui()
}
