//! Config to scene description.

use glam::DVec3;
use orbis_config::{Config, SiteConfig};
use orbis_geo::{ArcOptions, GeoPoint, build_arc, pillar_quads, place_marker};
use tracing::{debug, info};

use crate::{
    AmbientLightDesc, ArcDesc, CameraDesc, EarthDesc, GlowDesc, OrbitControlsDesc, PillarDesc,
    SceneDescription, SceneError, Spin,
};

/// Build the scene described by `config`.
///
/// Pillars are emitted in site order and arcs in route order. The spin
/// starts at angle zero.
///
/// # Errors
///
/// Fails if a route names an unknown site, if a site cannot carry a pillar
/// (zero globe radius), or if a route's endpoints are coincident or
/// antipodal.
pub fn build_scene(config: &Config) -> Result<SceneDescription, SceneError> {
    let radius = config.globe.radius;

    let pillars = config
        .sites
        .iter()
        .map(|site| build_pillar(config, site))
        .collect::<Result<Vec<_>, _>>()?;

    let arcs = config
        .routes
        .iter()
        .map(|route| build_route(config, &route.from, &route.to))
        .collect::<Result<Vec<_>, _>>()?;

    info!(
        radius,
        pillars = pillars.len(),
        arcs = arcs.len(),
        "built globe scene"
    );

    Ok(SceneDescription {
        camera: camera(config),
        controls: OrbitControlsDesc {
            target: DVec3::ZERO,
            enable_zoom: config.camera.enable_zoom,
        },
        ambient_light: AmbientLightDesc {
            color: config.lighting.ambient_color,
            intensity: config.lighting.ambient_intensity,
        },
        earth: EarthDesc {
            radius,
            detail: config.globe.detail,
            texture: config.globe.texture.clone(),
            depth_write: config.globe.depth_write,
        },
        glow: GlowDesc {
            texture: config.glow.texture.clone(),
            color: config.glow.color,
            opacity: config.glow.opacity,
            scale: DVec3::new(radius * config.glow.scale, radius * config.glow.scale, 1.0),
            transparent: true,
            depth_write: false,
            depth_test: false,
            render_order: config.glow.render_order,
        },
        pillars,
        arcs,
        spin: Spin::new(config.globe.spin_rate),
    })
}

fn camera(config: &Config) -> CameraDesc {
    let cam = &config.camera;
    let aspect = if cam.height == 0 {
        1.0
    } else {
        f64::from(cam.width) / f64::from(cam.height)
    };

    CameraDesc {
        fov_deg: cam.fov_deg,
        aspect,
        near: cam.near,
        far: cam.far,
        position: DVec3::new(0.0, 0.0, cam.distance),
    }
}

fn build_pillar(config: &Config, site: &SiteConfig) -> Result<PillarDesc, SceneError> {
    let radius = config.globe.radius;
    let placement =
        place_marker(radius, site.lon, site.lat).map_err(|source| SceneError::Marker {
            site: site.name.clone(),
            source,
        })?;

    let width = radius * config.pillar.width_ratio;
    let height = radius * config.pillar.height_ratio;
    debug!(site = %site.name, position = ?placement.position, "placed pillar");

    Ok(PillarDesc {
        site: site.name.clone(),
        color: site.color,
        texture: config.pillar.texture.clone(),
        width,
        height,
        quads: pillar_quads(&placement, width, height),
        placement,
    })
}

fn build_route(config: &Config, from: &str, to: &str) -> Result<ArcDesc, SceneError> {
    let lookup = |name: &str| {
        config
            .site(name)
            .map(|s| GeoPoint::new(s.lon, s.lat))
            .ok_or_else(|| SceneError::UnknownSite {
                from: from.to_string(),
                to: to.to_string(),
                missing: name.to_string(),
            })
    };
    let start = lookup(from)?;
    let end = lookup(to)?;

    let options = ArcOptions {
        segments: config.arc.segments,
        bulge: config.arc.bulge,
        color: config.arc.color,
        fly_line_color: config.arc.fly_line_color,
    };
    let curve = build_arc(config.globe.radius, start, end, &options).map_err(|source| {
        SceneError::Arc {
            from: from.to_string(),
            to: to.to_string(),
            source,
        }
    })?;
    debug!(from, to, samples = curve.points.len(), "built flight arc");

    Ok(ArcDesc {
        from: from.to_string(),
        to: to.to_string(),
        world_points: curve.world_points(),
        curve,
    })
}
