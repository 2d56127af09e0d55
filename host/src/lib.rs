macro_rules! warn_err {
    ($expr:expr, $($arg:tt)+) => {
        $expr.map_err(|e| log::warn!($($arg)+, e)).ok()
    };
}

pub(crate) mod bridge;
pub(crate) mod window;

pub mod host_app;
