fn main() -> anyhow::Result<()> {
    swipedeck::cli::run()
}
