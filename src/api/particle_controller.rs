use rand::Rng;
use tracing::{debug, trace, warn};

use crate::dom::Document;
use crate::effects::Particle;
use crate::error::{MotionError, MotionResult};
use crate::extensions::MotionEvent;
use crate::frame::FrameScheduler;

use super::LandingEngine;

impl<D: Document, F: FrameScheduler> LandingEngine<D, F> {
    /// Fills the particle container with randomized floating dots.
    ///
    /// The shared keyframes are injected into `head` only when no element
    /// carries the style id yet. Returns the number of particles appended; a
    /// page without the container gets none.
    pub fn spawn_particles<R: Rng + ?Sized>(&mut self, rng: &mut R) -> MotionResult<usize> {
        let config = &self.core.config.particles;
        let Some(container) = self.document.element_by_id(&config.container_id) else {
            trace!(id = %config.container_id, "no particle container on page");
            return Ok(0);
        };

        for _ in 0..config.count {
            let particle = Particle::random(rng, config);
            let node = self.document.create_element("div")?;
            for (property, value) in particle.style_properties(config) {
                self.document.set_style(node, property, &value)?;
            }
            self.document.append_child(container, node)?;
        }

        if self.document.element_by_id(&config.style_id).is_none() {
            let css = config.keyframes_css(rng.gen_bool(0.5));
            if let Err(err) = self.inject_particle_styles(&css) {
                warn!(error = %err, "particle keyframes not injected");
            }
        }

        let count = self.core.config.particles.count;
        self.core.particles_spawned += count;
        debug!(count, total = self.core.particles_spawned, "particles spawned");
        self.emit_motion_event(MotionEvent::ParticlesSpawned { count });
        Ok(count)
    }

    fn inject_particle_styles(&mut self, css: &str) -> MotionResult<()> {
        let head = self
            .document
            .head()
            .ok_or_else(|| MotionError::MissingElement("head".to_owned()))?;
        let style = self.document.create_element("style")?;
        self.document
            .set_attribute(style, "id", &self.core.config.particles.style_id)?;
        self.document.set_text(style, css)?;
        self.document.append_child(head, style)
    }
}
