/// The geodetic datums a map provider can expect coordinates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Datum {
    /// GPS datum, used by OSM and Google
    #[default]
    Wgs84,
    /// The obfuscated "Mars" datum mandated for on-shore maps in China
    Gcj02,
    /// Baidu's additional offset on top of GCJ-02
    Bd09,
}

impl Datum {
    pub const fn name(self) -> &'static str {
        match self {
            Datum::Wgs84 => "WGS84",
            Datum::Gcj02 => "GCJ02",
            Datum::Bd09 => "BD09",
        }
    }
}

impl std::fmt::Display for Datum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
