use crate::app::helpers::visibility::PointerPosition;
use crate::core::catalog::ProjectStatus;
use crate::theme::AppTheme;
use iced::widget::{button, container, pick_list, rule, scrollable, text_editor, text_input};
use iced::{Border, Color, Gradient, Shadow, Vector};

fn scale(color: Color, factor: f32) -> Color {
    Color {
        r: (color.r * factor).min(1.0),
        g: (color.g * factor).min(1.0),
        b: (color.b * factor).min(1.0),
        ..color
    }
}

fn with_alpha(color: Color, a: f32) -> Color {
    Color { a, ..color }
}

/// Purple-to-blue brand gradient
fn brand_gradient(theme: &AppTheme, factor: f32) -> Gradient {
    Gradient::Linear(
        iced::gradient::Linear::new(std::f32::consts::FRAC_PI_2)
            .add_stop(0.0, scale(theme.accent, factor))
            .add_stop(1.0, scale(theme.accent_alt, factor)),
    )
}

pub fn main_container(theme: &AppTheme) -> container::Style {
    container::Style {
        background: Some(theme.bg_base.into()),
        text_color: Some(theme.fg_primary),
        ..Default::default()
    }
}

/// Sticky header; gains a border and shadow once the page has scrolled
pub fn header_container(theme: &AppTheme, scrolled: bool) -> container::Style {
    let base = container::Style {
        background: Some(with_alpha(theme.bg_header, if scrolled { 0.97 } else { 0.85 }).into()),
        text_color: Some(theme.fg_primary),
        ..Default::default()
    };

    if scrolled {
        container::Style {
            border: Border {
                color: theme.border,
                width: 1.0,
                radius: 0.0.into(),
            },
            shadow: Shadow {
                color: with_alpha(theme.accent, 0.12),
                offset: Vector::new(0.0, 6.0),
                blur_radius: 18.0,
            },
            ..base
        }
    } else {
        base
    }
}

/// Section background whose gradient leans toward the pointer
pub fn section_background(
    theme: &AppTheme,
    pointer: Option<PointerPosition>,
    alternate: bool,
) -> container::Style {
    let pointer = pointer.unwrap_or_default();
    // Map the horizontal pointer position onto a quarter turn of gradient angle
    let angle = std::f32::consts::FRAC_PI_4 + pointer.x / 100.0 * std::f32::consts::FRAC_PI_2;
    let glow_alpha = if theme.is_light() { 0.08 } else { 0.15 };
    let base = if alternate {
        theme.bg_surface
    } else {
        theme.bg_base
    };

    let gradient = Gradient::Linear(
        iced::gradient::Linear::new(angle)
            .add_stop(0.0, base)
            .add_stop(
                (pointer.y / 100.0).clamp(0.05, 0.95),
                Color {
                    r: (base.r + theme.accent.r * glow_alpha).min(1.0),
                    g: (base.g + theme.accent.g * glow_alpha).min(1.0),
                    b: (base.b + theme.accent.b * glow_alpha).min(1.0),
                    a: 1.0,
                },
            )
            .add_stop(1.0, base),
    );

    container::Style {
        background: Some(gradient.into()),
        text_color: Some(theme.fg_primary),
        ..Default::default()
    }
}

pub fn card_container(theme: &AppTheme) -> container::Style {
    container::Style {
        background: Some(theme.bg_surface.into()),
        border: Border {
            color: theme.border,
            width: 1.0,
            radius: 12.0.into(),
        },
        shadow: Shadow {
            color: theme.shadow_color,
            offset: Vector::new(0.0, 2.0),
            blur_radius: 3.0,
        },
        ..Default::default()
    }
}

/// Featured projects get an accent outline
pub fn featured_card_container(theme: &AppTheme) -> container::Style {
    container::Style {
        border: Border {
            color: with_alpha(theme.accent, 0.6),
            width: 1.5,
            radius: 12.0.into(),
        },
        shadow: Shadow {
            color: with_alpha(theme.accent, 0.18),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 12.0,
        },
        ..card_container(theme)
    }
}

/// Image placeholder at the top of a project card
pub fn card_banner_container(theme: &AppTheme) -> container::Style {
    container::Style {
        background: Some(brand_gradient(theme, 0.7).into()),
        text_color: Some(theme.fg_on_accent),
        border: Border {
            radius: 10.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

pub fn badge_container(color: Color, theme: &AppTheme) -> container::Style {
    container::Style {
        background: Some(with_alpha(color, 0.18).into()),
        text_color: Some(if theme.is_light() {
            scale(color, 0.8)
        } else {
            color
        }),
        border: Border {
            color: with_alpha(color, 0.4),
            width: 1.0,
            radius: 999.0.into(),
        },
        ..Default::default()
    }
}

pub fn status_color(theme: &AppTheme, status: ProjectStatus) -> Color {
    match status {
        ProjectStatus::Live => theme.success,
        ProjectStatus::InProgress => theme.warning,
        ProjectStatus::Completed => theme.info,
    }
}

/// Success and failure banners inside the contact card
pub fn banner_container(theme: &AppTheme, color: Color) -> container::Style {
    container::Style {
        background: Some(with_alpha(color, 0.12).into()),
        text_color: Some(theme.fg_primary),
        border: Border {
            color,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

/// Track and fill for the scroll progress and character budget bars
pub fn bar_track(theme: &AppTheme) -> container::Style {
    container::Style {
        background: Some(theme.bg_elevated.into()),
        border: Border {
            radius: 2.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

pub fn bar_fill(theme: &AppTheme, color: Option<Color>) -> container::Style {
    container::Style {
        background: Some(match color {
            Some(color) => color.into(),
            None => brand_gradient(theme, 1.0).into(),
        }),
        border: Border {
            radius: 2.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

pub fn primary_button(theme: &AppTheme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(brand_gradient(theme, 1.0).into()),
        text_color: theme.fg_on_accent,
        border: Border {
            radius: 10.0.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: theme.shadow_color,
            offset: Vector::new(0.0, 2.0),
            blur_radius: 3.0,
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(brand_gradient(theme, 1.08).into()),
            shadow: Shadow {
                color: with_alpha(theme.accent, 0.35),
                offset: Vector::new(0.0, 4.0),
                blur_radius: 12.0,
            },
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(brand_gradient(theme, 0.95).into()),
            shadow: Shadow {
                color: theme.shadow_color,
                offset: Vector::new(0.0, 0.5),
                blur_radius: 1.5,
            },
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(with_alpha(theme.accent, 0.4).into()),
            text_color: with_alpha(theme.fg_on_accent, 0.6),
            shadow: Shadow::default(),
            ..base
        },
        button::Status::Active => base,
    }
}

/// Outlined accent button used for secondary calls to action
pub fn outline_button(theme: &AppTheme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: None,
        text_color: theme.accent_hover,
        border: Border {
            color: with_alpha(theme.accent, 0.5),
            width: 2.0,
            radius: 10.0.into(),
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(with_alpha(theme.accent, 0.1).into()),
            border: Border {
                color: theme.accent,
                ..base.border
            },
            ..base
        },
        button::Status::Disabled => button::Style {
            text_color: theme.fg_muted,
            ..base
        },
        button::Status::Active => base,
    }
}

pub fn secondary_button(theme: &AppTheme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(theme.bg_surface.into()),
        text_color: theme.fg_primary,
        border: Border {
            color: theme.border,
            width: 1.0,
            radius: 8.0.into(),
        },
        shadow: Shadow {
            color: theme.shadow_color,
            offset: Vector::new(0.0, 2.0),
            blur_radius: 3.0,
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(scale(theme.bg_surface, 1.08).into()),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(scale(theme.bg_surface, 0.95).into()),
            shadow: Shadow {
                color: theme.shadow_color,
                offset: Vector::new(0.0, 0.5),
                blur_radius: 1.5,
            },
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(with_alpha(theme.bg_surface, 0.5).into()),
            text_color: theme.fg_muted,
            shadow: Shadow::default(),
            ..base
        },
        button::Status::Active => base,
    }
}

/// Header nav links and About tabs; `active` marks the current item
pub fn nav_button(theme: &AppTheme, status: button::Status, active: bool) -> button::Style {
    let base = button::Style {
        background: if active {
            Some(with_alpha(theme.accent, 0.15).into())
        } else {
            None
        },
        text_color: if active {
            theme.fg_primary
        } else {
            theme.fg_secondary
        },
        border: Border {
            color: if active {
                with_alpha(theme.accent, 0.4)
            } else {
                Color::TRANSPARENT
            },
            width: 1.0,
            radius: 10.0.into(),
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered if !active => button::Style {
            background: Some(theme.bg_hover.into()),
            text_color: theme.fg_primary,
            ..base
        },
        _ => base,
    }
}

/// Category filter buttons
pub fn filter_button(theme: &AppTheme, status: button::Status, active: bool) -> button::Style {
    if active {
        return primary_button(theme, status);
    }
    let base = secondary_button(theme, status);
    button::Style {
        border: Border {
            radius: 999.0.into(),
            ..base.border
        },
        ..base
    }
}

/// Technology chips; the chip matching the active tag is highlighted
pub fn tag_button(theme: &AppTheme, status: button::Status, active: bool) -> button::Style {
    let tint = if active { 0.35 } else { 0.12 };
    let base = button::Style {
        background: Some(with_alpha(theme.accent, tint).into()),
        text_color: if active {
            theme.fg_primary
        } else {
            theme.accent_hover
        },
        border: Border {
            color: with_alpha(theme.accent, if active { 0.8 } else { 0.25 }),
            width: 1.0,
            radius: 999.0.into(),
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(with_alpha(theme.accent, tint + 0.1).into()),
            ..base
        },
        _ => base,
    }
}

/// Text input styling; `invalid` swaps the border for the danger color
pub fn themed_text_input(
    theme: &AppTheme,
    status: text_input::Status,
    invalid: bool,
) -> text_input::Style {
    let border_color = |normal: Color| if invalid { theme.danger } else { normal };

    match status {
        text_input::Status::Active => text_input::Style {
            background: theme.bg_elevated.into(),
            border: Border {
                color: border_color(theme.border),
                width: 1.0,
                radius: 8.0.into(),
            },
            icon: theme.fg_muted,
            placeholder: theme.fg_muted,
            value: theme.fg_primary,
            selection: with_alpha(theme.accent, 0.4),
        },
        text_input::Status::Hovered => text_input::Style {
            background: theme.bg_hover.into(),
            border: Border {
                color: border_color(theme.border_strong),
                width: 1.0,
                radius: 8.0.into(),
            },
            icon: theme.fg_secondary,
            placeholder: theme.fg_muted,
            value: theme.fg_primary,
            selection: with_alpha(theme.accent, 0.4),
        },
        text_input::Status::Focused { .. } => text_input::Style {
            background: theme.bg_elevated.into(),
            border: Border {
                color: border_color(theme.accent),
                width: 2.0,
                radius: 8.0.into(),
            },
            icon: theme.accent,
            placeholder: theme.fg_muted,
            value: theme.fg_primary,
            selection: with_alpha(theme.accent, 0.4),
        },
        text_input::Status::Disabled => text_input::Style {
            background: with_alpha(theme.bg_elevated, 0.5).into(),
            border: Border {
                color: with_alpha(theme.border, 0.3),
                width: 1.0,
                radius: 8.0.into(),
            },
            icon: theme.fg_muted,
            placeholder: theme.fg_muted,
            value: theme.fg_muted,
            selection: theme.accent,
        },
    }
}

/// Multi-line message editor, derived from the toolkit default so only
/// colors and borders are overridden
pub fn themed_text_editor(
    app_theme: &AppTheme,
    iced_theme: &iced::Theme,
    status: text_editor::Status,
    invalid: bool,
) -> text_editor::Style {
    let mut style = text_editor::default(iced_theme, status);
    let focused = matches!(status, text_editor::Status::Focused { .. });

    style.background = app_theme.bg_elevated.into();
    style.border = Border {
        color: if invalid {
            app_theme.danger
        } else if focused {
            app_theme.accent
        } else {
            app_theme.border
        },
        width: if focused { 2.0 } else { 1.0 },
        radius: 8.0.into(),
    };
    style.placeholder = app_theme.fg_muted;
    style.value = app_theme.fg_primary;
    style.selection = with_alpha(app_theme.accent, 0.4);
    style
}

/// Pick list (dropdown) styling with theme-aware colors
pub fn themed_pick_list(theme: &AppTheme, status: pick_list::Status) -> pick_list::Style {
    match status {
        pick_list::Status::Active => pick_list::Style {
            background: theme.bg_elevated.into(),
            border: Border {
                color: theme.border,
                width: 1.0,
                radius: 8.0.into(),
            },
            handle_color: theme.fg_secondary,
            placeholder_color: theme.fg_muted,
            text_color: theme.fg_primary,
        },
        pick_list::Status::Hovered => pick_list::Style {
            background: theme.bg_hover.into(),
            border: Border {
                color: theme.border_strong,
                width: 1.0,
                radius: 8.0.into(),
            },
            handle_color: theme.fg_primary,
            placeholder_color: theme.fg_muted,
            text_color: theme.fg_primary,
        },
        pick_list::Status::Opened { .. } => pick_list::Style {
            background: theme.bg_elevated.into(),
            border: Border {
                color: theme.accent,
                width: 2.0,
                radius: 8.0.into(),
            },
            handle_color: theme.accent,
            placeholder_color: theme.fg_muted,
            text_color: theme.fg_primary,
        },
    }
}

/// Pick list menu styling (the dropdown menu itself)
pub fn themed_pick_list_menu(theme: &AppTheme) -> iced::overlay::menu::Style {
    iced::overlay::menu::Style {
        background: theme.bg_surface.into(),
        border: Border {
            color: theme.border_strong,
            width: 1.0,
            radius: 8.0.into(),
        },
        shadow: Shadow {
            color: theme.shadow_color,
            offset: Vector::new(0.0, 4.0),
            blur_radius: 8.0,
        },
        text_color: theme.fg_primary,
        selected_background: with_alpha(theme.accent, 0.2).into(),
        selected_text_color: theme.fg_primary,
    }
}

/// Semi-transparent modal backdrop that works with both light and dark themes
pub fn modal_backdrop(theme: &AppTheme) -> container::Style {
    container::Style {
        background: Some(with_alpha(theme.bg_base, 0.85).into()),
        ..Default::default()
    }
}

/// Themed horizontal rule (separator line)
pub fn themed_horizontal_rule(theme: &AppTheme) -> rule::Style {
    rule::Style {
        color: theme.divider,
        radius: 0.0.into(),
        fill_mode: rule::FillMode::Full,
        snap: true,
    }
}

/// Themed page scrollbar
pub fn themed_scrollable(theme: &AppTheme, status: scrollable::Status) -> scrollable::Style {
    let scroller_color = match status {
        scrollable::Status::Dragged { .. } => theme.accent,
        scrollable::Status::Hovered {
            is_vertical_scrollbar_hovered: true,
            ..
        } => theme.fg_secondary,
        _ => theme.fg_muted,
    };

    let rail = scrollable::Rail {
        background: Some(theme.bg_elevated.into()),
        border: Border {
            color: theme.border,
            width: 0.0,
            radius: 4.0.into(),
        },
        scroller: scrollable::Scroller {
            background: scroller_color.into(),
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: 4.0.into(),
            },
        },
    };

    let auto_scroll = scrollable::AutoScroll {
        background: theme.bg_surface.into(),
        border: Border {
            color: theme.border,
            width: 1.0,
            radius: 4.0.into(),
        },
        shadow: Shadow {
            color: theme.shadow_color,
            offset: Vector::new(0.0, 2.0),
            blur_radius: 4.0,
        },
        icon: theme.fg_primary,
    };

    scrollable::Style {
        container: container::Style::default(),
        vertical_rail: rail,
        horizontal_rail: rail,
        gap: None,
        auto_scroll,
    }
}
