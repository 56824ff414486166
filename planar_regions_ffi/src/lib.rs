//! C foreign function interface for planar_regions.
//!
//! All functions that can fail return an `i32` error code, `0` means success and `-1` means a
//! panic was caught. Function specific codes are listed on each function.
#![allow(non_camel_case_types)]
use core::slice;
use planar_regions::{
    core::math::Vector2,
    region::{boolean_opt, BooleanOp, Region, RegionBooleanOptions},
};
use std::{convert::TryFrom, os::raw::c_char, panic};

pub mod error_handling;

use error_handling::{set_last_error, LAST_ERROR};

/// Helper macro to catch unwind and return -1 if panic was caught otherwise returns whatever the
/// expression returned.
macro_rules! ffi_catch_unwind {
    ($body: expr) => {
        match panic::catch_unwind(move || $body) {
            Ok(r) => r,
            Err(_) => -1,
        }
    };
}

/// Represents a simple 2D point with x and y coordinate values.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct pr_point {
    pub x: f64,
    pub y: f64,
}

impl pr_point {
    pub fn new(x: f64, y: f64) -> Self {
        pr_point { x, y }
    }

    pub fn from_internal(v: Vector2<f64>) -> Self {
        pr_point::new(v.x, v.y)
    }
}

/// Opaque type that wraps a [Region].
///
/// Note the internal member is only public for composing in other Rust libraries wanting to use the
/// FFI opaque type as part of their FFI API.
#[derive(Debug, Clone)]
pub struct pr_region(pub Region<f64>);

/// Opaque type that represents a list of [pr_region], used as a multi-polygon operand and result.
///
/// Note the internal member is only public for composing in other Rust libraries wanting to use the
/// FFI opaque type as part of their FFI API.
#[derive(Debug, Clone, Default)]
pub struct pr_regionlist(pub Vec<pr_region>);

impl pr_regionlist {
    pub fn from_internal<I>(regions: I) -> *mut pr_regionlist
    where
        I: IntoIterator<Item = Region<f64>>,
    {
        let r = regions.into_iter().map(pr_region).collect();
        Box::into_raw(Box::new(pr_regionlist(r)))
    }

    fn to_internal(&self) -> Vec<Region<f64>> {
        self.0.iter().map(|r| r.0.clone()).collect()
    }
}

/// FFI representation of [RegionBooleanOptions].
///
/// `snap_increment` less than or equal to zero disables snapping.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct pr_boolean_o {
    pub pos_equal_eps: f64,
    pub snap_increment: f64,
}

impl pr_boolean_o {
    /// Convert FFI boolean options type to internal type.
    pub fn to_internal(&self) -> RegionBooleanOptions<f64> {
        RegionBooleanOptions {
            pos_equal_eps: self.pos_equal_eps,
            snap_increment: if self.snap_increment > 0.0 {
                Some(self.snap_increment)
            } else {
                None
            },
        }
    }
}

impl Default for pr_boolean_o {
    fn default() -> Self {
        let d = RegionBooleanOptions::<f64>::default();
        Self {
            pos_equal_eps: d.pos_equal_eps,
            snap_increment: d.snap_increment.unwrap_or(0.0),
        }
    }
}

/// Write default option values to a [pr_boolean_o].
///
/// ## Specific Error Codes
/// * 1 = `options` is null.
///
/// # Safety
///
/// `options` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn pr_boolean_o_init(options: *mut pr_boolean_o) -> i32 {
    ffi_catch_unwind!({
        if options.is_null() {
            return 1;
        }

        options.write(Default::default());
        0
    })
}

fn boolean_op_from_u32(i: u32) -> Option<BooleanOp> {
    match i {
        0 => Some(BooleanOp::Union),
        1 => Some(BooleanOp::Intersect),
        2 => Some(BooleanOp::Difference),
        3 => Some(BooleanOp::Xor),
        _ => None,
    }
}

/// Create a new region object.
///
/// `points` is an array of [pr_point] to create the region with (may be null if `n_points` is 0).
/// `n_points` contains the number of points in the array.
/// `region` is an out parameter to hold the created region.
///
/// # Safety
///
/// `points` may be null if `n_points` is 0 or must point to a valid contiguous buffer of
/// [pr_point] with length of at least `n_points`.
/// `region` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn pr_region_create(
    points: *const pr_point,
    n_points: u32,
    region: *mut *const pr_region,
) -> i32 {
    ffi_catch_unwind!({
        let mut result = Region::new();
        if !points.is_null() && n_points != 0 {
            let data = slice::from_raw_parts(points, n_points as usize);
            result.points.reserve(data.len());
            for p in data {
                result.add(p.x, p.y);
            }
        }

        region.write(Box::into_raw(Box::new(pr_region(result))));
        0
    })
}

/// Free an existing [pr_region] object.
///
/// Nothing happens if `region` is null.
///
/// # Safety
///
/// `region` must be null or a valid pr_region object that was created with [pr_region_create],
/// is not owned by a [pr_regionlist], and has not already been freed.
#[no_mangle]
pub unsafe extern "C" fn pr_region_f(region: *mut pr_region) {
    if !region.is_null() {
        drop(Box::from_raw(region))
    }
}

/// Get the number of points in a region.
///
/// `count` used as out parameter to hold the point count.
///
/// ## Specific Error Codes
/// * 1 = `region` is null.
///
/// # Safety
///
/// `region` must be null or a valid pr_region object.
/// `count` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn pr_region_get_vertex_count(
    region: *const pr_region,
    count: *mut u32,
) -> i32 {
    ffi_catch_unwind!({
        if region.is_null() {
            return 1;
        }

        // panic as internal error if the count does not fit
        count.write(u32::try_from((*region).0.vertex_count()).unwrap());
        0
    })
}

/// Fills the buffer given with the points of a region.
///
/// You must use [pr_region_get_vertex_count] to ensure the buffer given has adequate length to be
/// filled with all points!
///
/// ## Specific Error Codes
/// * 1 = `region` is null.
///
/// # Safety
///
/// `region` must be null or a valid pr_region object.
/// `point_data` must point to a buffer that is large enough to hold all the points or a buffer
/// overrun will happen.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn pr_region_get_vertex_data(
    region: *const pr_region,
    point_data: *mut pr_point,
) -> i32 {
    ffi_catch_unwind!({
        if region.is_null() {
            return 1;
        }

        let buffer = slice::from_raw_parts_mut(point_data, (*region).0.vertex_count());
        for (out, &p) in buffer.iter_mut().zip((*region).0.iter()) {
            *out = pr_point::from_internal(p);
        }
        0
    })
}

/// Compute the (unsigned) area enclosed by a region.
///
/// `area` used as out parameter to hold the area.
///
/// ## Specific Error Codes
/// * 1 = `region` is null.
///
/// # Safety
///
/// `region` must be null or a valid pr_region object.
/// `area` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn pr_region_get_area(region: *const pr_region, area: *mut f64) -> i32 {
    ffi_catch_unwind!({
        if region.is_null() {
            return 1;
        }

        area.write((*region).0.area());
        0
    })
}

/// Create a new [pr_regionlist] object.
///
/// `capacity` is the number of regions to pre-allocate space for. May be zero.
/// `regionlist` is an out parameter to hold the created list.
///
/// # Safety
///
/// `regionlist` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn pr_regionlist_create(
    capacity: usize,
    regionlist: *mut *const pr_regionlist,
) -> i32 {
    ffi_catch_unwind!({
        regionlist.write(Box::into_raw(Box::new(pr_regionlist(Vec::with_capacity(
            capacity,
        )))));
        0
    })
}

/// Free an existing [pr_regionlist] object and all regions owned by it.
///
/// Nothing happens if `regionlist` is null.
///
/// # Safety
///
/// `regionlist` must be null or a valid [pr_regionlist] object that has not already been freed.
#[no_mangle]
pub unsafe extern "C" fn pr_regionlist_f(regionlist: *mut pr_regionlist) {
    if !regionlist.is_null() {
        drop(Box::from_raw(regionlist))
    }
}

/// Append a [pr_region] to the end of a [pr_regionlist], the list takes ownership of the region.
///
/// After this call `region` is no longer valid and must not be freed by the caller.
///
/// ## Specific Error Codes
/// * 1 = `regionlist` and/or `region` is null.
///
/// # Safety
///
/// `regionlist` must be null or a valid [pr_regionlist] object.
/// `region` must be null or a valid [pr_region] object created with [pr_region_create] that is not
/// already owned by a list.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn pr_regionlist_push(
    regionlist: *mut pr_regionlist,
    region: *mut pr_region,
) -> i32 {
    ffi_catch_unwind!({
        if regionlist.is_null() || region.is_null() {
            return 1;
        }

        let region = Box::from_raw(region);
        (*regionlist).0.push(*region);
        0
    })
}

/// Get the number of regions inside a [pr_regionlist].
///
/// `count` used as out parameter to hold the region count.
///
/// ## Specific Error Codes
/// * 1 = `regionlist` is null.
///
/// # Safety
///
/// `regionlist` must be null or a valid [pr_regionlist] object.
/// `count` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn pr_regionlist_get_count(
    regionlist: *const pr_regionlist,
    count: *mut u32,
) -> i32 {
    ffi_catch_unwind!({
        if regionlist.is_null() {
            return 1;
        }

        count.write(u32::try_from((*regionlist).0.len()).unwrap());
        0
    })
}

/// Get a region at the given index position in the [pr_regionlist].
///
/// `region` used as out parameter to hold the region pointer. The region is still owned by the
/// list and is only valid while the list is alive and unmodified.
///
/// ## Specific Error Codes
/// * 1 = `regionlist` is null.
/// * 2 = `position` out of range for the [pr_regionlist].
///
/// # Safety
///
/// `regionlist` must be null or a valid [pr_regionlist] object.
/// `region` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn pr_regionlist_get_region(
    regionlist: *const pr_regionlist,
    position: u32,
    region: *mut *const pr_region,
) -> i32 {
    ffi_catch_unwind!({
        if regionlist.is_null() {
            return 1;
        }

        match (&(*regionlist).0).get(position as usize) {
            Some(r) => {
                region.write(r as *const pr_region);
                0
            }
            None => 2,
        }
    })
}

/// Wraps [boolean_opt], performing a boolean operation between two multi-polygon operands.
///
/// `options` is allowed to be null (default options will be used).
/// `result` is an out parameter to hold a newly created [pr_regionlist] with the result regions,
/// the caller must free it with [pr_regionlist_f].
///
/// Boolean operations are:
/// * 0 = [BooleanOp::Union]
/// * 1 = [BooleanOp::Intersect]
/// * 2 = [BooleanOp::Difference]
/// * 3 = [BooleanOp::Xor]
///
/// ## Specific Error Codes
/// * 1 = `regionlist1` and/or `regionlist2` is null.
/// * 2 = `operation` is unrecognized (must be one of the values listed).
/// * 3 = boolean operation failed, message available from [pr_last_error_msg].
///
/// # Safety
///
/// `regionlist1` and `regionlist2` must each be null or a valid [pr_regionlist] object.
/// `options` must be null or point to a valid [pr_boolean_o].
/// `result` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn pr_boolean(
    regionlist1: *const pr_regionlist,
    regionlist2: *const pr_regionlist,
    operation: u32,
    options: *const pr_boolean_o,
    result: *mut *const pr_regionlist,
) -> i32 {
    ffi_catch_unwind!({
        if regionlist1.is_null() || regionlist2.is_null() {
            return 1;
        }

        let op = match boolean_op_from_u32(operation) {
            Some(op) => op,
            None => {
                return 2;
            }
        };

        let options = if options.is_null() {
            RegionBooleanOptions::default()
        } else {
            (*options).to_internal()
        };

        let regions1 = (*regionlist1).to_internal();
        let regions2 = (*regionlist2).to_internal();
        match boolean_opt(&regions1, &regions2, op, &options) {
            Ok(regions) => {
                result.write(pr_regionlist::from_internal(regions));
                0
            }
            Err(e) => {
                set_last_error(
                    e.to_string(),
                    format!(
                        "pr_boolean: {:?} with {} and {} regions, {:?}",
                        op,
                        regions1.len(),
                        regions2.len(),
                        options
                    ),
                );
                3
            }
        }
    })
}

/// Get the message of the last error that occurred on the calling thread.
///
/// `msg` used as out parameter to hold a null terminated string pointer. The string is owned by the
/// library and is valid until the next error occurs on the same thread.
///
/// ## Specific Error Codes
/// * 1 = `msg` is null.
/// * 2 = no error has occurred.
///
/// # Safety
///
/// `msg` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn pr_last_error_msg(msg: *mut *const c_char) -> i32 {
    ffi_catch_unwind!({
        if msg.is_null() {
            return 1;
        }

        LAST_ERROR.with(|last_error| match last_error.borrow().as_ref() {
            Some(data) => {
                msg.write(data.error_msg.as_ptr());
                0
            }
            None => 2,
        })
    })
}

/// Get the report data (failing function and input summary) of the last error that occurred on the
/// calling thread.
///
/// Same ownership and error codes as [pr_last_error_msg].
///
/// # Safety
///
/// `report` must point to a valid place in memory to be written.
#[no_mangle]
#[must_use]
pub unsafe extern "C" fn pr_last_error_report(report: *mut *const c_char) -> i32 {
    ffi_catch_unwind!({
        if report.is_null() {
            return 1;
        }

        LAST_ERROR.with(|last_error| match last_error.borrow().as_ref() {
            Some(data) => {
                report.write(data.error_report_data.as_ptr());
                0
            }
            None => 2,
        })
    })
}
