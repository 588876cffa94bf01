use super::{Compatibility, TypeComparator};
use crate::model::StructType;
use crate::oracle::AssignabilityOracle;

impl<O: AssignabilityOracle> TypeComparator<O> {
    /// Compare two struct shapes by their exported fields
    ///
    /// Unexported fields never matter. Every exported field of `s1` must
    /// still exist in `s2`, and the pair of field types must be compatible.
    /// New exported fields in `s2` downgrade `Identical` to `Compatible`.
    /// Field order is irrelevant.
    pub fn compare_structs(&self, s1: &StructType, s2: &StructType) -> Compatibility {
        self.compare_structs_at(s1, s2, 0)
    }

    pub(super) fn compare_structs_at(
        &self,
        s1: &StructType,
        s2: &StructType,
        depth: usize,
    ) -> Compatibility {
        let fields1 = s1.exported_fields();
        let fields2 = s2.exported_fields();
        let mut identical = true;

        for (name, f1) in &fields1 {
            // Dropping a visible field always breaks callers
            let Some(f2) = fields2.get(name) else {
                return Compatibility::Incompatible;
            };

            match self.compare_at(f1.ty.underlying(), f2.ty.underlying(), depth + 1) {
                Compatibility::Identical => {}
                Compatibility::Compatible => identical = false,
                Compatibility::Incompatible => return Compatibility::Incompatible,
            }
        }

        if fields2.keys().any(|name| !fields1.contains_key(name)) {
            identical = false;
        }

        if identical {
            Compatibility::Identical
        } else {
            Compatibility::Compatible
        }
    }
}
