//! Fluent builder for constructing a [`Supervisor`].

use lg_core::SimConfig;
use lg_spatial::{Geometry, GeometryBuilder};

use crate::{SimResult, Supervisor};

/// Fluent builder for [`Supervisor`].
///
/// | Method          | Default                    |
/// |-----------------|----------------------------|
/// | `.geometry(b)`  | [`Geometry::standard()`]   |
///
/// # Example
///
/// ```rust,ignore
/// let supervisor = SupervisorBuilder::new(SimConfig::default())
///     .geometry(
///         GeometryBuilder::new(Rect::new(0.0, 0.0, 100.0, 100.0))
///             .loop_bounds(Rect::new(10.0, 10.0, 80.0, 80.0))
///             .gates([Rect::new(40.0, 0.0, 20.0, 20.0), Rect::new(40.0, 80.0, 20.0, 20.0)]),
///     )
///     .build()?;
/// ```
pub struct SupervisorBuilder {
    config:   SimConfig,
    geometry: Option<GeometryBuilder>,
}

impl SupervisorBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config, geometry: None }
    }

    /// Use a custom layout instead of the standard one.  It is validated
    /// by [`build`](Self::build).
    pub fn geometry(mut self, layout: GeometryBuilder) -> Self {
        self.geometry = Some(layout);
        self
    }

    /// Validate the configuration and layout, then create both gates.
    pub fn build(self) -> SimResult<Supervisor> {
        self.config.validate()?;
        let geometry = match self.geometry {
            Some(layout) => layout.build()?,
            None => Geometry::standard(),
        };
        Ok(Supervisor::new(self.config, geometry))
    }
}
