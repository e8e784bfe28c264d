use std::{cell::Cell, rc::Rc, sync::Arc};

use glam::Vec3;

/// Something the camera follows. Read once per frame, never written.
pub trait FollowTarget {
    /// Current world-space position.
    fn position(&self) -> Vec3;
}

/// A fixed point.
impl FollowTarget for Vec3 {
    fn position(&self) -> Vec3 {
        *self
    }
}

/// A position shared with (and moved by) the host.
impl FollowTarget for Cell<Vec3> {
    fn position(&self) -> Vec3 {
        self.get()
    }
}

impl<T: FollowTarget + ?Sized> FollowTarget for &T {
    fn position(&self) -> Vec3 {
        (**self).position()
    }
}

impl<T: FollowTarget + ?Sized> FollowTarget for Rc<T> {
    fn position(&self) -> Vec3 {
        (**self).position()
    }
}

impl<T: FollowTarget + ?Sized> FollowTarget for Arc<T> {
    fn position(&self) -> Vec3 {
        (**self).position()
    }
}

impl<T: FollowTarget + ?Sized> FollowTarget for Box<T> {
    fn position(&self) -> Vec3 {
        (**self).position()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_cell_reflects_host_moves() {
        let target = Rc::new(Cell::new(Vec3::ZERO));
        let follower: Rc<Cell<Vec3>> = Rc::clone(&target);
        target.set(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(follower.position(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn boxed_trait_object() {
        let target: Box<dyn FollowTarget> = Box::new(Vec3::Y);
        assert_eq!(target.position(), Vec3::Y);
    }
}
