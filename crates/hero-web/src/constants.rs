// Web host tuning

// Element the scene renders into
pub const CANVAS_ID: &str = "hero-canvas";

// Device pixel ratio is clamped to this range when sizing the canvas backing store
pub const DPR_MIN: f64 = 1.0;
pub const DPR_MAX: f64 = 1.5;
