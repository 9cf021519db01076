use std::io::Write;

pub fn init_logger() {
    env_logger::builder()
        .filter_module("zen_syllabus", log::LevelFilter::Info)
        .parse_default_env()
        .format(|f, record| {
            writeln!(
                f,
                "{:<5} [{}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
