//! Pose source collaborator
//!
//! The odometry engine owns the pose. Corrections take one snapshot through
//! [`PoseSource::pose`] and, on success, hand back exactly one replacement
//! through [`PoseSource::set_pose`].

use core::cell::RefCell;

use crate::types::Pose;

/// Read and overwrite access to the tracked pose
///
/// Hosts with concurrent pose writers must make each call atomic on their
/// side; a correction never holds a lock across its read and its write.
pub trait PoseSource {
    /// Current pose estimate
    fn pose(&self) -> Pose;

    /// Replace the pose estimate unconditionally
    fn set_pose(&mut self, pose: Pose);
}

/// A bare pose is its own source
impl PoseSource for Pose {
    fn pose(&self) -> Pose {
        *self
    }

    fn set_pose(&mut self, pose: Pose) {
        *self = pose;
    }
}

/// Shared pose cell, for hosts where the tracking loop keeps its own handle
impl PoseSource for &RefCell<Pose> {
    fn pose(&self) -> Pose {
        *self.borrow()
    }

    fn set_pose(&mut self, pose: Pose) {
        *self.borrow_mut() = pose;
    }
}

impl<P: PoseSource + ?Sized> PoseSource for &mut P {
    fn pose(&self) -> Pose {
        (**self).pose()
    }

    fn set_pose(&mut self, pose: Pose) {
        (**self).set_pose(pose);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pose_is_its_own_source() {
        let mut pose = Pose::new(1.0, 2.0, 3.0);
        pose.set_pose(Pose::new(4.0, 5.0, 6.0));
        assert_eq!(PoseSource::pose(&pose), Pose::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_refcell_source() {
        let cell = RefCell::new(Pose::default());
        let mut source = &cell;
        source.set_pose(Pose::new(-1.0, 1.0, 90.0));

        assert_eq!(source.pose(), Pose::new(-1.0, 1.0, 90.0));
        assert_eq!(*cell.borrow(), Pose::new(-1.0, 1.0, 90.0));
    }
}
