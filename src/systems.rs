//! Known RetroPie systems and ROM file extensions

/// File extensions accepted as ROMs (lowercase, with leading dot)
pub const ROM_EXTENSIONS: &[&str] = &[
    ".zip", ".7z", ".nes", ".fds", ".sfc", ".smc", ".fig", ".gb", ".gbc", ".gba", ".n64", ".z64",
    ".v64", ".md", ".gen", ".smd", ".sms", ".gg", ".32x", ".pce", ".a26", ".a78", ".lnx", ".ngp",
    ".ngc", ".ws", ".wsc", ".nds", ".bin", ".iso", ".cue", ".chd", ".pbp", ".cso", ".cdi", ".gdi",
    ".vb", ".min", ".col", ".int", ".vec", ".d64", ".adf", ".tzx", ".rom", ".mx1", ".mx2",
];

/// RetroPie directory name → human readable system name
const DISPLAY_NAMES: &[(&str, &str)] = &[
    ("3do", "3DO"),
    ("amiga", "Commodore Amiga"),
    ("arcade", "Arcade"),
    ("atari2600", "Atari 2600"),
    ("atari7800", "Atari 7800"),
    ("atarilynx", "Atari Lynx"),
    ("c64", "Commodore 64"),
    ("coleco", "ColecoVision"),
    ("dreamcast", "Sega Dreamcast"),
    ("fba", "FinalBurn Alpha"),
    ("fds", "Famicom Disk System"),
    ("gamegear", "Sega Game Gear"),
    ("gb", "Game Boy"),
    ("gba", "Game Boy Advance"),
    ("gbc", "Game Boy Color"),
    ("intellivision", "Intellivision"),
    ("mame-libretro", "MAME"),
    ("mastersystem", "Sega Master System"),
    ("megadrive", "Sega Mega Drive"),
    ("msx", "MSX"),
    ("n64", "Nintendo 64"),
    ("nds", "Nintendo DS"),
    ("neogeo", "Neo Geo"),
    ("nes", "Nintendo Entertainment System"),
    ("ngp", "Neo Geo Pocket"),
    ("ngpc", "Neo Geo Pocket Color"),
    ("pcengine", "PC Engine"),
    ("pokemini", "Pokemon Mini"),
    ("psp", "PlayStation Portable"),
    ("psx", "PlayStation"),
    ("saturn", "Sega Saturn"),
    ("sega32x", "Sega 32X"),
    ("segacd", "Sega CD"),
    ("sg-1000", "Sega SG-1000"),
    ("snes", "Super Nintendo Entertainment System"),
    ("vectrex", "Vectrex"),
    ("virtualboy", "Virtual Boy"),
    ("wonderswan", "WonderSwan"),
    ("wonderswancolor", "WonderSwan Color"),
    ("zxspectrum", "ZX Spectrum"),
];

/// Human readable name for a system directory, falling back to the directory name
pub fn display_name(directory: &str) -> String {
    let key = directory.to_lowercase();
    DISPLAY_NAMES
        .iter()
        .find(|(dir, _)| *dir == key)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| directory.to_string())
}

/// Whether a file name carries one of the ROM extensions (case-insensitive)
pub fn is_rom_file(name: &str) -> bool {
    let lower = name.to_lowercase();
    ROM_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Dot-files and dot-directories are never catalogued
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}
