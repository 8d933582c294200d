//! Transform stack with lazily repaired cumulative products
//!
//! Each nesting level owns one frame matrix. `resolve` returns
//! `frames[0] · frames[1] · … · frames[depth]`, memoized per prefix so that
//! only the entries invalidated since the last resolve are recomputed.
//!
//! `valid` counts the leading cache entries known to be correct. Mutating the
//! top frame lowers it to at most `depth`; entries below the top never depend
//! on the top frame, so they survive.

use gl2d_math::{Mat4, Vec3};

/// Per-instance counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformStackStats {
    /// Calls to [`TransformStack::resolve`]
    pub resolves: u64,
    /// Resolves that needed no recomputation
    pub cache_hits: u64,
    /// Matrix products computed while repairing the cache
    pub products: u64,
}

/// A stack of affine frames, one per save/restore nesting level
///
/// Not internally synchronized; use one stack per drawing context.
#[derive(Debug, Clone)]
pub struct TransformStack {
    /// Always non-empty; the top frame is `frames[depth]`
    frames: Vec<Mat4>,
    /// `cache[i]` = `frames[0] · … · frames[i]` for `i < valid`
    cache: Vec<Mat4>,
    valid: usize,
    stats: TransformStackStats,
}

impl TransformStack {
    /// Create a stack whose base frame is the identity
    pub fn new() -> Self {
        Self::with_capacity(8)
    }

    /// Create a stack with room for `capacity` nesting levels before reallocating
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let mut frames = Vec::with_capacity(capacity);
        let mut cache = Vec::with_capacity(capacity);
        frames.push(Mat4::IDENTITY);
        cache.push(Mat4::IDENTITY);
        log::debug!("transform stack created (capacity: {})", capacity);

        Self {
            frames,
            cache,
            valid: 1,
            stats: TransformStackStats::default(),
        }
    }

    /// Create a stack whose base frame is `base`
    ///
    /// Nothing is cached until the first resolve above depth 0.
    pub fn with_base(base: Mat4) -> Self {
        let mut frames = Vec::with_capacity(8);
        frames.push(base);
        log::debug!("transform stack created with explicit base");

        Self {
            frames,
            cache: Vec::with_capacity(8),
            valid: 0,
            stats: TransformStackStats::default(),
        }
    }

    /// Drop every frame and start over from `base` (identity when `None`)
    ///
    /// Statistics are kept.
    pub fn reset(&mut self, base: Option<Mat4>) -> &mut Self {
        self.frames.clear();
        self.cache.clear();

        match base {
            Some(m) => {
                self.frames.push(m);
                self.valid = 0;
            }
            None => {
                self.frames.push(Mat4::IDENTITY);
                self.cache.push(Mat4::IDENTITY);
                self.valid = 1;
            }
        }

        log::debug!("transform stack reset (explicit base: {})", base.is_some());
        self
    }

    /// Index of the top frame (0 when nothing has been pushed)
    pub fn depth(&self) -> usize {
        self.frames.len() - 1
    }

    /// The local transform of the current nesting level
    pub fn top(&self) -> Mat4 {
        self.frames[self.depth()]
    }

    /// The local transform at `index`, if that level is active
    pub fn frame(&self, index: usize) -> Option<Mat4> {
        self.frames.get(index).copied()
    }

    /// Whether a resolve right now would be served without recomputation
    pub fn is_cached(&self) -> bool {
        self.depth() == 0 || self.valid >= self.depth() + 1
    }

    pub fn stats(&self) -> TransformStackStats {
        self.stats
    }

    /// Mark the top frame's cumulative product stale
    fn invalidate_top(&mut self) {
        let depth = self.depth();
        if self.valid > depth {
            self.valid = depth;
        }
    }

    fn apply(&mut self, m: &Mat4) {
        let depth = self.depth();
        self.frames[depth] = self.frames[depth].multiply(m);
    }

    /// Replace the top frame with the identity
    pub fn set_identity(&mut self) -> &mut Self {
        let depth = self.depth();
        self.frames[depth] = Mat4::IDENTITY;
        self.invalidate_top();
        self
    }

    /// Open a new nesting level with an identity frame
    pub fn push(&mut self) -> &mut Self {
        self.push_matrix(Mat4::IDENTITY)
    }

    /// Open a new nesting level whose local transform is `m`
    pub fn push_matrix(&mut self, m: Mat4) -> &mut Self {
        self.frames.push(m);
        // A previous pop may have left a cached entry for this index.
        let depth = self.depth();
        if self.valid > depth {
            self.valid = depth;
        }
        self
    }

    /// Close the current nesting level; no-op at depth 0
    pub fn pop(&mut self) -> &mut Self {
        if self.frames.len() > 1 {
            self.frames.pop();
        }
        self
    }

    /// Right-multiply the top frame by a translation
    pub fn translate(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.translate_vec(Vec3::new(x, y, z))
    }

    pub fn translate_vec(&mut self, t: Vec3) -> &mut Self {
        self.apply(&Mat4::from_translation(t));
        self.invalidate_top();
        self
    }

    /// Right-multiply the top frame by a diagonal scale
    pub fn scale(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.scale_vec(Vec3::new(x, y, z))
    }

    pub fn scale_vec(&mut self, s: Vec3) -> &mut Self {
        self.apply(&Mat4::from_scale(s));
        self.invalidate_top();
        self
    }

    /// Rotate by `angle_degrees`, once per nonzero axis weight
    ///
    /// The weights are not a normalized axis: each nonzero weight applies a
    /// single-axis rotation whose trig terms are multiplied by it, in the
    /// order Z, Y, X. In stack space a positive angle about Z turns +X
    /// toward +Y.
    pub fn rotate(&mut self, angle_degrees: f64, x: f64, y: f64, z: f64) -> &mut Self {
        let is_set = |w: f64| w != 0.0 && !w.is_nan();

        if is_set(x) || is_set(y) || is_set(z) {
            let (sin, cos) = (-angle_degrees.to_radians()).sin_cos();

            if is_set(z) {
                self.apply(&Mat4::rotation_z(sin, cos, z));
            }
            if is_set(y) {
                self.apply(&Mat4::rotation_y(sin, cos, y));
            }
            if is_set(x) {
                self.apply(&Mat4::rotation_x(sin, cos, x));
            }
        }

        self.invalidate_top();
        self
    }

    /// [`rotate`](Self::rotate) with the axis weights packed in a vector
    pub fn rotate_axis_angle(&mut self, angle_degrees: f64, weights: Vec3) -> &mut Self {
        self.rotate(angle_degrees, weights.x(), weights.y(), weights.z())
    }

    /// Rotate about X, then Y, then Z, each by its own angle in degrees
    pub fn rotate_euler(&mut self, angles_degrees: Vec3) -> &mut Self {
        self.rotate(angles_degrees.x(), 1.0, 0.0, 0.0);
        self.rotate(angles_degrees.y(), 0.0, 1.0, 0.0);
        self.rotate(angles_degrees.z(), 0.0, 0.0, 1.0)
    }

    /// Net transform of every active frame, composed base-first
    pub fn resolve(&mut self) -> Mat4 {
        self.stats.resolves += 1;

        let depth = self.depth();
        if depth == 0 {
            self.stats.cache_hits += 1;
            return self.frames[0];
        }

        let wanted = depth + 1;
        if self.valid < wanted {
            self.cache.truncate(self.valid);
            for i in self.valid..wanted {
                let entry = if i == 0 {
                    self.frames[0]
                } else {
                    self.stats.products += 1;
                    self.cache[i - 1].multiply(&self.frames[i])
                };
                self.cache.push(entry);
            }
            log::trace!(
                "transform stack repaired {} cache entries at depth {}",
                wanted - self.valid,
                depth
            );
            self.valid = wanted;
        } else {
            if self.valid > wanted {
                self.cache.truncate(wanted);
                self.valid = wanted;
            }
            self.stats.cache_hits += 1;
        }

        self.cache[depth]
    }
}

impl Default for TransformStack {
    fn default() -> Self {
        Self::new()
    }
}
