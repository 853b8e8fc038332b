fn main() -> anyhow::Result<()> {
    scholar_ai_lib::run()
}
