//! Public/private visibility wrapper.
//!
//! Visibility is recorded, not enforced: consumers decide what private means.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Access {
    Public,
    Private,
}

impl Access {
    pub fn is_public(self) -> bool {
        self == Access::Public
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Access::Public => f.write_str("Public"),
            Access::Private => f.write_str("Private"),
        }
    }
}

/// A value tagged with its visibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessControlled<A> {
    pub access: Access,
    pub value: A,
}

impl<A> AccessControlled<A> {
    pub fn new(access: Access, value: A) -> Self {
        Self { access, value }
    }

    pub fn public(value: A) -> Self {
        Self::new(Access::Public, value)
    }

    pub fn private(value: A) -> Self {
        Self::new(Access::Private, value)
    }

    /// The value as seen from outside its package: only public values are
    /// visible.
    pub fn with_public_access(&self) -> Option<&A> {
        self.access.is_public().then_some(&self.value)
    }

    /// The value as seen from inside its package: always visible.
    pub fn with_private_access(&self) -> &A {
        &self.value
    }

    pub fn map<B, F: FnOnce(A) -> B>(self, f: F) -> AccessControlled<B> {
        AccessControlled {
            access: self.access,
            value: f(self.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_views() {
        let public = AccessControlled::public(1);
        let private = AccessControlled::private(2);
        assert_eq!(public.with_public_access(), Some(&1));
        assert_eq!(private.with_public_access(), None);
        assert_eq!(private.with_private_access(), &2);
        assert_eq!(private.map(|v| v * 10).value, 20);
    }
}
