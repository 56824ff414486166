//! Internal building blocks of the region boolean operations, exposed for testing and
//! benchmarking.
pub mod chainer;
pub mod linked_list;
pub mod region_boolean;
pub mod selector;
pub mod sweep;
pub mod sweep_events;
mod sweep_intersect;
