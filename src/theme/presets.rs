use super::AppTheme;

/// Midnight - Default dark theme
/// Near-black grays with a purple-to-blue brand gradient
pub fn midnight() -> AppTheme {
    AppTheme::from_hex(
        "Midnight",
        0x0011_1827, // bg_base - Gray 900
        0x0011_1827, // bg_header - Matches page, blurred in spirit
        0x001F_2937, // bg_surface - Gray 800 cards
        0x0037_4151, // bg_elevated - Gray 700 inputs
        0x004B_5563, // bg_hover - Gray 600
        0x005B_21B6, // bg_active - Deep violet
        0x00F9_FAFB, // fg_primary - Gray 50
        0x00D1_D5DB, // fg_secondary - Gray 300
        0x009C_A3AF, // fg_muted - Gray 400
        0x00FF_FFFF, // fg_on_accent - White on purple
        0x00A8_55F7, // accent - Purple 500
        0x00C0_84FC, // accent_hover - Purple 400
        0x003B_82F6, // accent_alt - Blue 500
        0x0022_C55E, // success - Green 500
        0x00EA_B308, // warning - Yellow 500
        0x00EF_4444, // danger - Red 500
        0x0060_A5FA, // info - Blue 400
        0x0037_4151, // border - Gray 700
        0x00A8_55F7, // border_strong - Purple accent
        0x001F_2937, // divider - Surface match
    )
}

/// Daylight - Light counterpart to Midnight
/// Soft gray-white page with the same brand hues darkened for contrast
pub fn daylight() -> AppTheme {
    AppTheme::from_hex(
        "Daylight",
        0x00F9_FAFB, // bg_base - Gray 50
        0x00FF_FFFF, // bg_header - White bar
        0x00FF_FFFF, // bg_surface - White cards
        0x00F3_F4F6, // bg_elevated - Gray 100 inputs
        0x00E5_E7EB, // bg_hover - Gray 200
        0x00F3_E8FF, // bg_active - Purple 100
        0x0011_1827, // fg_primary - Gray 900
        0x0037_4151, // fg_secondary - Gray 700
        0x006B_7280, // fg_muted - Gray 500
        0x00FF_FFFF, // fg_on_accent - White on purple
        0x0093_33EA, // accent - Purple 600
        0x007E_22CE, // accent_hover - Purple 700
        0x0025_63EB, // accent_alt - Blue 600
        0x0016_A34A, // success - Green 600
        0x00CA_8A04, // warning - Yellow 600
        0x00DC_2626, // danger - Red 600
        0x0025_63EB, // info - Blue 600
        0x00D1_D5DB, // border - Gray 300
        0x0093_33EA, // border_strong - Purple accent
        0x00E5_E7EB, // divider - Gray 200
    )
}
