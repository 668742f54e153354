//! Compiled-in lock domains. Changing an expected digest here is a reviewed,
//! manual edit made after the protected file has been re-validated.

pub struct BuiltinDomain {
    pub name: &'static str,
    pub entries: &'static [(&'static str, &'static str, &'static str)],
}

pub const FIELD: BuiltinDomain = BuiltinDomain {
    name: "field",
    entries: &[
        (
            "EMUAuthenticTables.h",
            "plugins/field/Source/dsp/EMUAuthenticTables.h",
            "06fbc6e2fd27db087219f0d9f53f9962997f8cb8001490458f6053bc2e46aa86",
        ),
        (
            "ZPlaneFilter.h",
            "plugins/field/Source/dsp/ZPlaneFilter.h",
            "d73839b6852f7f5d8f135b18cea9c8f68c89962e33342b91bdea99607003e821",
        ),
        (
            "EnvelopeFollower.h",
            "plugins/field/Source/dsp/EnvelopeFollower.h",
            "81d97f6fcbe3547cf319a47205c7ab560c5691c55d8654091ac12b0a6318ba07",
        ),
    ],
};

pub const ENGINE_FIELD: BuiltinDomain = BuiltinDomain {
    name: "engine-field",
    entries: &[
        (
            "ZPlaneFilter.h",
            "plugins/EngineField/Source/dsp/ZPlaneFilter.h",
            "dbfe0b15ba73ab1a44a698e31617fecb0a71cb622dc10c7770994f55e3554f33",
        ),
        (
            "EMUAuthenticTables.h",
            "plugins/EngineField/Source/dsp/EMUAuthenticTables.h",
            "b3bd58a897b16065c12faa3e2b966f0ac9a28581231ece2be599e19d14cf3756",
        ),
    ],
};

pub const DOMAINS: &[BuiltinDomain] = &[FIELD, ENGINE_FIELD];

pub fn find(name: &str) -> Option<&'static BuiltinDomain> {
    DOMAINS.iter().find(|d| d.name == name)
}

pub fn domain_names() -> Vec<&'static str> {
    DOMAINS.iter().map(|d| d.name).collect()
}
