use std::sync::Once;
use tiling_window::pure::geometry::Rect;
use tracing_subscriber::EnvFilter;

pub const SCREEN: Rect = Rect::new(0, 0, 1920, 1080);
pub const LEFT_HALF: Rect = Rect::new(0, 0, 960, 1080);

static INIT: Once = Once::new();

// Set RUST_LOG=tiling_window=trace to see state transitions while debugging a failure
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
