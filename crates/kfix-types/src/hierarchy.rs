use std::collections::{BTreeMap, HashSet, VecDeque};

use crate::{ClassDescriptor, ClassId, FunctionDescriptor};

/// Read access to class declarations and their supertypes.
pub trait ClassHierarchy {
    fn class(&self, id: ClassId) -> Option<&ClassDescriptor>;

    /// Every transitive supertype of `id`, breadth first, each listed once.
    ///
    /// Direct supertypes come first in declaration order. `id` itself is never
    /// included, even when the hierarchy is cyclic. Supertypes with no known
    /// declaration are skipped.
    fn all_supertypes(&self, id: ClassId) -> Vec<ClassId> {
        let mut out = Vec::new();
        let mut seen = HashSet::from([id]);
        let mut queue = VecDeque::from([id]);

        while let Some(current) = queue.pop_front() {
            let Some(class) = self.class(current) else {
                tracing::debug!(class = current.0, "supertype without a declaration");
                continue;
            };
            for &supertype in &class.supertypes {
                if seen.insert(supertype) {
                    out.push(supertype);
                    queue.push_back(supertype);
                }
            }
        }

        out.retain(|id| self.class(*id).is_some());
        out
    }
}

/// In-memory class table.
#[derive(Clone, Debug, Default)]
pub struct ClassStore {
    classes: BTreeMap<ClassId, ClassDescriptor>,
    next_id: u32,
}

impl ClassStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_class(&mut self, fq_name: impl Into<String>, supertypes: Vec<ClassId>) -> ClassId {
        let id = ClassId(self.next_id);
        self.next_id += 1;
        self.classes.insert(
            id,
            ClassDescriptor {
                id,
                fq_name: fq_name.into(),
                supertypes,
                functions: Vec::new(),
            },
        );
        id
    }

    /// Add a function to its owner. Returns `false` if the owner is unknown.
    pub fn add_function(&mut self, function: FunctionDescriptor) -> bool {
        match self.classes.get_mut(&function.owner) {
            Some(class) => {
                class.functions.push(function);
                true
            }
            None => false,
        }
    }

    /// Replace a class's direct supertypes (used to build cyclic test hierarchies).
    pub fn set_supertypes(&mut self, id: ClassId, supertypes: Vec<ClassId>) {
        if let Some(class) = self.classes.get_mut(&id) {
            class.supertypes = supertypes;
        }
    }

    pub fn lookup(&self, fq_name: &str) -> Option<ClassId> {
        self.classes
            .values()
            .find(|class| class.fq_name == fq_name)
            .map(|class| class.id)
    }
}

impl ClassHierarchy for ClassStore {
    fn class(&self, id: ClassId) -> Option<&ClassDescriptor> {
        self.classes.get(&id)
    }
}
