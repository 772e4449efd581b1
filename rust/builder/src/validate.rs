// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Pre-allocation validation helpers.
//!
//! Every check runs before a handle is allocated and is side-effect-free,
//! so a failure anywhere in a construction operation leaves the file
//! untouched. Failures carry the offending parameter name.

use ifc_forge_schema::{EntityKind, SchemaRegistry};

use crate::error::{Error, Result};
use crate::file::{EntityHandle, ListShape, ModelFile};

fn expected_names(allowed: &[EntityKind]) -> String {
    let names: Vec<&str> = allowed.iter().map(|kind| kind.name()).collect();
    names.join(" | ")
}

/// Check a single live handle against a supertype union.
pub fn check_handle<F: ModelFile + ?Sized>(
    file: &F,
    registry: &SchemaRegistry,
    param: &'static str,
    handle: EntityHandle,
    allowed: &[EntityKind],
) -> Result<()> {
    let kind = file.kind_of(handle).ok_or(Error::Dangling { param })?;
    if !registry.is_subtype_of(kind, allowed)? {
        return Err(Error::NotASubtype {
            param,
            kind,
            expected: expected_names(allowed),
        });
    }
    Ok(())
}

/// A required handle: null rejects, then the subtype check applies.
pub fn required_handle<F: ModelFile + ?Sized>(
    file: &F,
    registry: &SchemaRegistry,
    param: &'static str,
    handle: Option<EntityHandle>,
    allowed: &[EntityKind],
) -> Result<EntityHandle> {
    let handle = handle.ok_or(Error::Missing { param })?;
    check_handle(file, registry, param, handle, allowed)?;
    Ok(handle)
}

/// An optional handle: null passes, a present handle is subtype-checked.
pub fn optional_handle<F: ModelFile + ?Sized>(
    file: &F,
    registry: &SchemaRegistry,
    param: &'static str,
    handle: Option<EntityHandle>,
    allowed: &[EntityKind],
) -> Result<Option<EntityHandle>> {
    if let Some(handle) = handle {
        check_handle(file, registry, param, handle, allowed)?;
    }
    Ok(handle)
}

/// A handle collection: every element subtype-checked, cardinality bounds
/// enforced.
pub fn handle_set<F: ModelFile + ?Sized>(
    file: &F,
    registry: &SchemaRegistry,
    param: &'static str,
    handles: &[EntityHandle],
    allowed: &[EntityKind],
    min: usize,
    max: Option<usize>,
) -> Result<()> {
    if handles.len() < min {
        return Err(Error::TooFew {
            param,
            min,
            len: handles.len(),
        });
    }
    if let Some(max) = max {
        if handles.len() > max {
            return Err(Error::TooMany {
                param,
                max,
                len: handles.len(),
            });
        }
    }
    for handle in handles {
        check_handle(file, registry, param, *handle, allowed)?;
    }
    Ok(())
}

fn bounds(min: usize, max: usize) -> String {
    if max == usize::MAX {
        format!("at least {min}")
    } else {
        format!("{min}..={max}")
    }
}

/// Enforce outer/inner cardinality of a matrix-like input.
pub fn list_shape(param: &'static str, rows: &[Vec<f64>], shape: ListShape) -> Result<()> {
    if rows.is_empty() {
        if shape.allow_empty {
            return Ok(());
        }
        return Err(Error::BadShape {
            param,
            detail: "outer list must not be empty".to_string(),
        });
    }
    if rows.len() < shape.min_outer || rows.len() > shape.max_outer {
        return Err(Error::BadShape {
            param,
            detail: format!(
                "outer list has {} row(s), expected {}",
                rows.len(),
                bounds(shape.min_outer, shape.max_outer)
            ),
        });
    }
    for (index, row) in rows.iter().enumerate() {
        if row.len() < shape.min_inner || row.len() > shape.max_inner {
            return Err(Error::BadShape {
                param,
                detail: format!(
                    "row {} has {} value(s), expected {}",
                    index,
                    row.len(),
                    bounds(shape.min_inner, shape.max_inner)
                ),
            });
        }
    }
    Ok(())
}

/// Positivity within tolerance: strictly greater than `eps`. Upstream
/// geometry can produce values that are zero within floating tolerance;
/// those must reject, so the boundary at exactly `eps` rejects.
pub fn positive(param: &'static str, value: f64, eps: f64) -> Result<f64> {
    if value > eps {
        Ok(value)
    } else {
        Err(Error::NotPositive { param, value })
    }
}

/// A string that must carry content.
pub fn non_empty_str<'a>(param: &'static str, value: &'a str) -> Result<&'a str> {
    if value.trim().is_empty() {
        Err(Error::EmptyString { param })
    } else {
        Ok(value)
    }
}
