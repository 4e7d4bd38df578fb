//! Container types. Children are boxed and exclusively owned.

use super::Type;

/// `[element]`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ListType {
    element: Box<Type>,
}

impl ListType {
    pub fn new(element: Type) -> Self {
        ListType {
            element: Box::new(element),
        }
    }

    pub fn element(&self) -> &Type {
        &self.element
    }

    pub fn into_element(self) -> Type {
        *self.element
    }
}

/// `{element}`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct SetType {
    element: Box<Type>,
}

impl SetType {
    pub fn new(element: Type) -> Self {
        SetType {
            element: Box::new(element),
        }
    }

    pub fn element(&self) -> &Type {
        &self.element
    }

    pub fn into_element(self) -> Type {
        *self.element
    }
}

/// `{key:value}`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct MapType {
    key: Box<Type>,
    value: Box<Type>,
}

impl MapType {
    pub fn new(key: Type, value: Type) -> Self {
        MapType {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn key(&self) -> &Type {
        &self.key
    }

    pub fn value(&self) -> &Type {
        &self.value
    }
}
