//! Starfield simulation: a population of stars distributed across depth
//! layers, displaced by a shared motion vector scaled down with depth and
//! recycled by point reflection when they leave the extents.

use bevy::prelude::*;
use rand::Rng;

use crate::math::Aabb;

use super::template::{StarTemplate, default_templates};

/// A single star stamped from a template.
///
/// Opacity and stacking order are derived from the layer at creation time
/// and never change afterwards; only the position mutates.
#[derive(Debug, Clone)]
pub struct Star {
    pub position: Vec2,
    pub layer: u32,
    pub color: Color,
    pub size: Vec2,
    pub alpha: f32,
    pub z_order: f32,
}

impl Star {
    /// Displace the star by `vector / layer`, so layer 1 moves at full
    /// speed and deeper layers trail behind it.
    ///
    /// With `delta` present the result is integrated over the elapsed
    /// time; without it the vector is applied as-is (one camera event).
    /// A zero-length vector never touches the position.
    pub fn displace(&mut self, vector: Vec2, delta: Option<f32>) {
        if vector == Vec2::ZERO {
            return;
        }

        let mut step = vector / self.layer as f32;
        if let Some(dt) = delta {
            step *= dt;
        }
        self.position += step;
    }
}

/// The live starfield: extents, generated stars and the drive knobs.
///
/// Drive it with either [`Starfield::advance`] every frame (manual
/// direction + velocity) or [`Starfield::follow_camera`] per camera move,
/// never both.
#[derive(Resource, Debug)]
pub struct Starfield {
    extents: Aabb,
    layers: u32,
    stars: Vec<Star>,
    /// Unit travel direction for the time-driven mode.
    pub direction: Vec2,
    /// Travel speed for the time-driven mode, in units per second.
    pub velocity: f32,
    /// Scroll scale for the camera-driven mode.
    pub camera_ratio: f32,
}

impl Starfield {
    /// Generate a starfield covering `extents`.
    ///
    /// Each star draws a uniform position inside the extents, a uniform
    /// template from the palette (built-in five-entry palette if `None`)
    /// and a uniform layer in `[1, layers]`. Opacity falls off linearly
    /// with depth from 1.0 down to a floor of 0.5, and the stacking order
    /// equals the layer index.
    ///
    /// The generation loop is inclusive and yields `stars + 1` instances.
    pub fn generate(
        extents: Aabb,
        layers: u32,
        stars: usize,
        templates: Option<Vec<StarTemplate>>,
        rng: &mut impl Rng,
    ) -> Self {
        assert!(layers >= 1, "layer count must be >= 1");
        let templates = templates.unwrap_or_else(default_templates);
        assert!(!templates.is_empty(), "palette must not be empty");

        let mut generated = Vec::with_capacity(stars + 1);
        for _ in 0..=stars {
            let x = extents.min_x + rng.gen_range(0.0..1.0) * extents.width();
            let y = extents.min_y + rng.gen_range(0.0..1.0) * extents.height();
            let template = &templates[rng.gen_range(0..templates.len())];
            let layer = rng.gen_range(1..=layers);
            let alpha = (layers - layer) as f32 / layers as f32 / 2.0 + 0.5;

            generated.push(Star {
                position: Vec2::new(x, y),
                layer,
                color: template.color,
                size: template.size,
                alpha,
                z_order: layer as f32,
            });
        }

        Self {
            extents,
            layers,
            stars: generated,
            direction: Vec2::ZERO,
            velocity: 0.0,
            camera_ratio: 10.0,
        }
    }

    pub fn extents(&self) -> Aabb {
        self.extents
    }

    pub fn layers(&self) -> u32 {
        self.layers
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Time-driven update: integrate `direction * velocity` over `delta`.
    pub fn advance(&mut self, delta: f32) {
        let vector = self.direction * self.velocity;
        self.move_and_recycle(vector, Some(delta));
    }

    /// Camera-driven update: scroll opposite the camera displacement,
    /// scaled by `camera_ratio`. Applied per move, with no time scaling.
    pub fn follow_camera(&mut self, old: Vec2, new: Vec2) {
        let vector = (old - new) * self.camera_ratio;
        self.move_and_recycle(vector, None);
    }

    /// Displace every star, then recycle the ones that left the extents
    /// and are still moving away from them.
    ///
    /// Recycling negates the position (point reflection through the
    /// origin), a cheap wraparound that assumes extents roughly centered
    /// on the origin. Stars that merely clip an edge while heading back
    /// inside are left alone.
    fn move_and_recycle(&mut self, vector: Vec2, delta: Option<f32>) {
        for star in &mut self.stars {
            let last_position = star.position;
            star.displace(vector, delta);

            if !self.extents.contains(star.position) {
                let old_distance = self.extents.distance_to(last_position);
                let new_distance = self.extents.distance_to(star.position);
                if new_distance > old_distance {
                    star.position = -star.position;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    const LAYERS: u32 = 3;
    const STARS: usize = 200;

    fn test_rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn test_extents() -> Aabb {
        Aabb::new(-400.0, -400.0, 800.0, 800.0)
    }

    fn test_field() -> Starfield {
        Starfield::generate(test_extents(), LAYERS, STARS, None, &mut test_rng())
    }

    fn star_at(position: Vec2, layer: u32) -> Star {
        Star {
            position,
            layer,
            color: Color::WHITE,
            size: Vec2::splat(1.0),
            alpha: 1.0,
            z_order: layer as f32,
        }
    }

    /// Single-star field for recycle checks.
    fn field_with_star(extents: Aabb, star: Star) -> Starfield {
        Starfield {
            extents,
            layers: LAYERS,
            stars: vec![star],
            direction: Vec2::ZERO,
            velocity: 0.0,
            camera_ratio: 10.0,
        }
    }

    #[test]
    fn generates_star_count_plus_one() {
        let field = test_field();
        assert_eq!(
            field.stars().len(),
            STARS + 1,
            "inclusive generation range must yield stars + 1 instances"
        );
    }

    #[test]
    fn generated_layers_within_bounds() {
        let field = test_field();
        for star in field.stars() {
            assert!(
                (1..=LAYERS).contains(&star.layer),
                "layer {} out of [1, {LAYERS}]",
                star.layer
            );
        }
    }

    #[test]
    fn generated_positions_inside_extents() {
        let field = test_field();
        let extents = field.extents();
        for star in field.stars() {
            assert!(
                extents.contains(star.position),
                "star at {:?} outside extents",
                star.position
            );
        }
    }

    #[test]
    fn alpha_matches_layer_formula() {
        let field = test_field();
        for star in field.stars() {
            let expected = (LAYERS - star.layer) as f32 / LAYERS as f32 / 2.0 + 0.5;
            assert_eq!(star.alpha, expected);
            assert!((0.5..=1.0).contains(&star.alpha));
        }
    }

    #[test]
    fn alpha_non_increasing_with_depth() {
        let field = test_field();
        let mut stars: Vec<&Star> = field.stars().iter().collect();
        stars.sort_by_key(|s| s.layer);
        for pair in stars.windows(2) {
            assert!(
                pair[0].alpha >= pair[1].alpha,
                "deeper layer {} brighter than layer {}",
                pair[1].layer,
                pair[0].layer
            );
        }
    }

    #[test]
    fn z_order_equals_layer() {
        let field = test_field();
        for star in field.stars() {
            assert_eq!(star.z_order, star.layer as f32);
        }
    }

    #[test]
    fn generation_is_deterministic_per_seed() {
        let a = test_field();
        let b = test_field();
        for (x, y) in a.stars().iter().zip(b.stars()) {
            assert_eq!(x.position, y.position);
            assert_eq!(x.layer, y.layer);
        }

        let mut other_rng = StdRng::seed_from_u64(99);
        let c = Starfield::generate(test_extents(), LAYERS, STARS, None, &mut other_rng);
        let differs = a
            .stars()
            .iter()
            .zip(c.stars())
            .any(|(x, y)| x.position != y.position);
        assert!(differs, "different seeds must scatter stars differently");
    }

    #[test]
    #[should_panic(expected = "layer count must be >= 1")]
    fn zero_layers_is_fatal() {
        Starfield::generate(test_extents(), 0, 10, None, &mut test_rng());
    }

    #[test]
    fn displace_zero_vector_is_a_no_op() {
        let mut star = star_at(Vec2::new(3.0, 4.0), 1);
        star.displace(Vec2::ZERO, Some(0.016));
        assert_eq!(star.position, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn displace_layer_one_moves_at_full_speed() {
        let mut star = star_at(Vec2::ZERO, 1);
        star.displace(Vec2::new(10.0, 0.0), Some(0.5));
        assert_eq!(star.position, Vec2::new(5.0, 0.0));
    }

    #[test]
    fn displace_scales_inversely_with_layer() {
        let mut star = star_at(Vec2::ZERO, 4);
        star.displace(Vec2::new(8.0, 4.0), None);
        assert_eq!(star.position, Vec2::new(2.0, 1.0));
    }

    #[test]
    fn displace_without_delta_applies_vector_as_is() {
        let mut star = star_at(Vec2::new(1.0, 1.0), 1);
        star.displace(Vec2::new(-3.0, 2.0), None);
        assert_eq!(star.position, Vec2::new(-2.0, 3.0));
    }

    #[test]
    fn advance_integrates_direction_and_velocity() {
        let mut field = field_with_star(test_extents(), star_at(Vec2::ZERO, 1));
        field.direction = Vec2::new(1.0, 0.0);
        field.velocity = 10.0;
        field.advance(0.5);
        assert_eq!(field.stars()[0].position, Vec2::new(5.0, 0.0));
    }

    #[test]
    fn star_leaving_extents_is_point_reflected() {
        let extents = Aabb::new(-50.0, -50.0, 100.0, 100.0);
        let mut field = field_with_star(extents, star_at(Vec2::new(49.0, 0.0), 1));
        field.direction = Vec2::new(1.0, 0.0);
        field.velocity = 10.0;
        field.advance(1.0);
        // 49 + 10 = 59, outside and moving away -> reflected to -59
        assert_eq!(field.stars()[0].position, Vec2::new(-59.0, 0.0));
    }

    #[test]
    fn star_returning_toward_extents_is_not_recycled() {
        let extents = Aabb::new(-50.0, -50.0, 100.0, 100.0);
        let mut field = field_with_star(extents, star_at(Vec2::new(60.0, 0.0), 1));
        field.direction = Vec2::new(-1.0, 0.0);
        field.velocity = 5.0;
        field.advance(1.0);
        // Still outside, but distance shrank from 10 to 5: leave it alone.
        assert_eq!(field.stars()[0].position, Vec2::new(55.0, 0.0));
    }

    #[test]
    fn star_sliding_along_edge_is_not_recycled() {
        let extents = Aabb::new(-50.0, -50.0, 100.0, 100.0);
        let mut field = field_with_star(extents, star_at(Vec2::new(60.0, 0.0), 1));
        field.direction = Vec2::new(0.0, 1.0);
        field.velocity = 5.0;
        field.advance(1.0);
        // Distance stays 10 along the edge normal: not strictly greater.
        assert_eq!(field.stars()[0].position, Vec2::new(60.0, 5.0));
    }

    #[test]
    fn follow_camera_scrolls_opposite_the_delta() {
        let mut field = field_with_star(test_extents(), star_at(Vec2::ZERO, 1));
        field.camera_ratio = 10.0;
        field.follow_camera(Vec2::ZERO, Vec2::new(1.0, 1.0));
        assert_eq!(field.stars()[0].position, Vec2::new(-10.0, -10.0));
    }

    #[test]
    fn follow_camera_respects_layer_depth() {
        let mut field = field_with_star(test_extents(), star_at(Vec2::ZERO, 2));
        field.camera_ratio = 10.0;
        field.follow_camera(Vec2::ZERO, Vec2::new(1.0, 0.0));
        assert_eq!(field.stars()[0].position, Vec2::new(-5.0, 0.0));
    }
}
