//! Mirror the navigator's visual state into UI entities every frame.

use bevy::prelude::*;

use super::forms::LauncherForms;
use super::launcher::{BaseColor, FieldText, VisualLink};
use crate::menu::{MenuConfig, Navigator, VisualTarget};

/// Strongest overlay alpha, reached at the maximum blur radius.
const MAX_BLUR_ALPHA: f32 = 0.6;

/// Overlay alpha standing in for a blur radius.
pub fn blur_alpha(radius: f32, clear: f32, max: f32) -> f32 {
    if max <= clear {
        return 0.0;
    }
    ((radius - clear) / (max - clear)).clamp(0.0, 1.0) * MAX_BLUR_ALPHA
}

/// Copy scale, rotation, visibility and opacity onto linked entities.
pub fn sync_visuals(
    navigator: Res<Navigator>,
    config: Res<MenuConfig>,
    mut visual_query: Query<(
        &VisualLink,
        &mut Transform,
        &mut Visibility,
        Option<&BaseColor>,
        Option<&mut BackgroundColor>,
        Option<&mut TextColor>,
    )>,
) {
    let visuals = navigator.visuals();

    for (link, mut transform, mut visibility, base, background, text_color) in visual_query.iter_mut() {
        let Some(props) = visuals.get(link.0) else {
            continue;
        };

        transform.scale = Vec3::new(props.scale, props.scale, 1.0);
        transform.rotation = Quat::from_rotation_z(-props.rotation.to_radians());
        *visibility = if props.visible {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };

        let Some(BaseColor(base)) = base else {
            continue;
        };
        let alpha = match link.0 {
            VisualTarget::Blur => blur_alpha(props.blur_radius, config.blur_radius_clear, config.blur_radius_max),
            _ => base.alpha() * props.opacity,
        };
        if let Some(mut background) = background {
            background.0 = base.with_alpha(alpha);
        }
        if let Some(mut text_color) = text_color {
            text_color.0 = base.with_alpha(alpha);
        }
    }
}

/// Render field values, masking secrets and marking the focused field.
pub fn sync_field_text(forms: Res<LauncherForms>, mut text_query: Query<(&FieldText, &mut Text)>) {
    if !forms.is_changed() {
        return;
    }
    for (FieldText(field), mut text) in text_query.iter_mut() {
        let mut shown = forms.display(*field);
        if forms.focused() == Some(*field) {
            shown.push('|');
        }
        text.0 = shown;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blur_alpha_follows_radius() {
        assert_eq!(blur_alpha(1.0, 1.0, 4.0), 0.0);
        assert_eq!(blur_alpha(4.0, 1.0, 4.0), MAX_BLUR_ALPHA);
        assert!((blur_alpha(2.5, 1.0, 4.0) - MAX_BLUR_ALPHA / 2.0).abs() < 1e-6);
        assert_eq!(blur_alpha(3.0, 4.0, 4.0), 0.0);
    }
}
