//! The capability required of objects stored in an R-Tree.

use std::rc::Rc;
use std::sync::Arc;

use crate::rect::Rect;

/// Any type that can report its bounding rectangle can be indexed.
///
/// The tree stores whatever value it is given, so callers that want to keep
/// ownership of their objects should insert a handle (`Arc<T>`, `&T`, an id
/// type implementing `Spatial`, ...) rather than the object itself.
pub trait Spatial {
    /// The bounding rectangle of this object.
    fn bounds(&self) -> Rect;
}

impl Spatial for Rect {
    fn bounds(&self) -> Rect {
        self.clone()
    }
}

impl<S: Spatial + ?Sized> Spatial for &S {
    fn bounds(&self) -> Rect {
        (**self).bounds()
    }
}

impl<S: Spatial + ?Sized> Spatial for Box<S> {
    fn bounds(&self) -> Rect {
        (**self).bounds()
    }
}

impl<S: Spatial + ?Sized> Spatial for Rc<S> {
    fn bounds(&self) -> Rect {
        (**self).bounds()
    }
}

impl<S: Spatial + ?Sized> Spatial for Arc<S> {
    fn bounds(&self) -> Rect {
        (**self).bounds()
    }
}
