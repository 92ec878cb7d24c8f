/// `println!` that only speaks in test builds, tagged with the calling module.
#[macro_export]
macro_rules! tprintln {
    ($($arg:tt)*) => {
        if cfg!(test) {
            println!("[{}] {}", module_path!(), format_args!($($arg)*));
        }
    };
}
