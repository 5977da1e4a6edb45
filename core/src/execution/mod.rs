//! Execution observation hooks
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod tracer;

pub use self::tracer::{
    AugmentationStep, ExecutionTracer, FlowObserver, LoggingObserver, NoopObserver, TraceEvent,
};
