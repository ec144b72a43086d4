use crate::domain::particle::Body;

/// True when the two circles overlap; touching exactly does not count.
pub fn collides(a: &impl Body, b: &impl Body) -> bool {
    let (ax, ay) = a.position();
    let (bx, by) = b.position();
    let reach = a.radius() + b.radius();
    let (dx, dy) = (ax - bx, ay - by);
    // Compare squared distances; both sides are non-negative.
    dx * dx + dy * dy < reach * reach
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::particle::{Enzyme, EnzymeParams, Particle};

    #[test]
    fn boundary_sits_at_the_sum_of_radii() {
        // Enzyme radius 4, substrate radius 2.
        let enzyme = Enzyme::new(10.0, 10.0, EnzymeParams::default());

        assert!(collides(&enzyme, &Particle::substrate(15.9, 10.0)));
        assert!(!collides(&enzyme, &Particle::substrate(16.1, 10.0)));
        assert!(!collides(&enzyme, &Particle::substrate(16.0, 10.0)));
    }

    #[test]
    fn works_along_both_axes_and_symmetrically() {
        let a = Particle::substrate(0.0, 0.0);
        let b = Particle::product(4.0, 3.0);

        // Distance 5 against reach 8.
        assert!(collides(&a, &b));
        assert!(collides(&b, &a));
        assert!(!collides(&a, &Particle::product(6.0, 6.0)));
    }
}
