use std::collections::HashSet;
use std::time::Instant;

use crate::errors::{CompatError, Result};
use crate::model::{TypeDescriptor, TypeSnapshot};
use crate::{log_op_end, log_op_error, log_op_start};

/// Validate a snapshot before handing it to the classifier
///
/// The comparators assume well-formed handles and never call this; hosts
/// that build descriptors from untrusted input can run it first.
///
/// Checks, in order:
/// 1. the snapshot has a non-empty name;
/// 2. every struct reachable from the declared type has unique field names;
/// 3. every interface reachable from it has unique method names.
///
/// # Errors
/// Returns the first defect found.
pub fn validate_snapshot(snapshot: &TypeSnapshot) -> Result<()> {
    let start = Instant::now();
    let type_name = snapshot.qualified_name();
    log_op_start!("validate_snapshot", type_name = %type_name);

    let result = if snapshot.name.is_empty() {
        Err(CompatError::EmptyTypeName)
    } else {
        validate_descriptor(&type_name, &snapshot.ty)
    };

    let duration_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(()) => log_op_end!("validate_snapshot", duration_ms = duration_ms, type_name = %type_name),
        Err(err) => log_op_error!(
            "validate_snapshot",
            err.clone(),
            duration_ms = duration_ms,
            type_name = %type_name
        ),
    }
    result
}

/// Validate a descriptor tree; `owner` names it in error reports
///
/// # Errors
/// * `DuplicateField` - a struct declares the same field name twice
/// * `DuplicateMethod` - an interface or named type repeats a method name
pub fn validate_descriptor(owner: &str, ty: &TypeDescriptor) -> Result<()> {
    match ty {
        TypeDescriptor::Basic(_) | TypeDescriptor::Opaque(_) => Ok(()),

        TypeDescriptor::Struct(s) => {
            let mut seen = HashSet::new();
            for field in &s.fields {
                // blank fields may repeat
                if field.name != "_" && !seen.insert(field.name.as_str()) {
                    return Err(CompatError::DuplicateField {
                        type_name: owner.to_string(),
                        field: field.name.clone(),
                    });
                }
            }
            for field in &s.fields {
                validate_descriptor(&format!("{}.{}", owner, field.name), &field.ty)?;
            }
            Ok(())
        }

        TypeDescriptor::Interface(iface) => unique_methods(owner, &iface.methods),

        TypeDescriptor::Named(named) => {
            let qualified = named.qualified_name();
            unique_methods(&qualified, &named.methods)?;
            validate_descriptor(&qualified, &named.underlying)
        }
    }
}

fn unique_methods(owner: &str, methods: &[crate::model::Method]) -> Result<()> {
    let mut seen = HashSet::new();
    for method in methods {
        if !seen.insert(method.name.as_str()) {
            return Err(CompatError::DuplicateMethod {
                type_name: owner.to_string(),
                method: method.name.clone(),
            });
        }
    }
    Ok(())
}
