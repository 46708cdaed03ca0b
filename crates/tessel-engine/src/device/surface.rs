use winit::dpi::PhysicalSize;

use super::SurfaceErrorAction;

pub(super) fn choose_surface_format(
    caps: &wgpu::SurfaceCapabilities,
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    choose_format(&caps.formats, prefer_srgb)
}

fn choose_format(
    formats: &[wgpu::TextureFormat],
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    if prefer_srgb {
        let preferred = [
            wgpu::TextureFormat::Bgra8UnormSrgb,
            wgpu::TextureFormat::Rgba8UnormSrgb,
        ];
        if let Some(f) = preferred.into_iter().find(|f| formats.contains(f)) {
            return Some(f);
        }
    }

    formats.first().copied()
}

pub(super) fn choose_alpha_mode(
    caps: &wgpu::SurfaceCapabilities,
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    requested
        .filter(|m| caps.alpha_modes.contains(m))
        .or_else(|| caps.alpha_modes.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

pub(super) fn map_surface_error(
    err: &wgpu::SurfaceError,
    size: PhysicalSize<u32>,
) -> SurfaceErrorAction {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => {
            if size.width > 0 && size.height > 0 {
                SurfaceErrorAction::Reconfigured
            } else {
                SurfaceErrorAction::SkipFrame
            }
        }
        wgpu::SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
        wgpu::SurfaceError::Timeout | wgpu::SurfaceError::Other => SurfaceErrorAction::SkipFrame,
    }
}

#[cfg(test)]
mod tests {
    use wgpu::TextureFormat as F;

    use super::*;

    #[test]
    fn prefers_srgb_when_offered() {
        let formats = [F::Bgra8Unorm, F::Rgba8UnormSrgb];
        assert_eq!(choose_format(&formats, true), Some(F::Rgba8UnormSrgb));
        assert_eq!(choose_format(&formats, false), Some(F::Bgra8Unorm));
    }

    #[test]
    fn falls_back_to_first_format() {
        assert_eq!(choose_format(&[F::Rgb10a2Unorm], true), Some(F::Rgb10a2Unorm));
        assert_eq!(choose_format(&[], true), None);
    }

    #[test]
    fn surface_errors_map_to_actions() {
        use wgpu::SurfaceError as E;

        let size = PhysicalSize::new(800, 600);
        assert_eq!(map_surface_error(&E::Lost, size), SurfaceErrorAction::Reconfigured);
        assert_eq!(map_surface_error(&E::Timeout, size), SurfaceErrorAction::SkipFrame);
        assert_eq!(map_surface_error(&E::OutOfMemory, size), SurfaceErrorAction::Fatal);
        assert_eq!(
            map_surface_error(&E::Outdated, PhysicalSize::new(0, 0)),
            SurfaceErrorAction::SkipFrame
        );
    }
}
