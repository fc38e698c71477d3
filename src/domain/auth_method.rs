use std::fmt;

/// Authentication methods accepted in the METHOD column of `pg_hba.conf`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthMethod {
    Trust,
    Reject,
    ScramSha256,
    Md5,
    Password,
    Gss,
    Sspi,
    Ident,
    Peer,
    Pam,
    Ldap,
    Radius,
    Cert,
}

impl AuthMethod {
    /// All recognized methods, in `pg_hba.conf` documentation order.
    pub const ALL: [AuthMethod; 13] = [
        AuthMethod::Trust,
        AuthMethod::Reject,
        AuthMethod::ScramSha256,
        AuthMethod::Md5,
        AuthMethod::Password,
        AuthMethod::Gss,
        AuthMethod::Sspi,
        AuthMethod::Ident,
        AuthMethod::Peer,
        AuthMethod::Pam,
        AuthMethod::Ldap,
        AuthMethod::Radius,
        AuthMethod::Cert,
    ];

    /// Method used by the replication-user rules, independent of configuration.
    pub const REPLICATION: AuthMethod = AuthMethod::Md5;

    /// Name as written in `pg_hba.conf`.
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthMethod::Trust => "trust",
            AuthMethod::Reject => "reject",
            AuthMethod::ScramSha256 => "scram-sha-256",
            AuthMethod::Md5 => "md5",
            AuthMethod::Password => "password",
            AuthMethod::Gss => "gss",
            AuthMethod::Sspi => "sspi",
            AuthMethod::Ident => "ident",
            AuthMethod::Peer => "peer",
            AuthMethod::Pam => "pam",
            AuthMethod::Ldap => "ldap",
            AuthMethod::Radius => "radius",
            AuthMethod::Cert => "cert",
        }
    }

    /// Parse a method from its `pg_hba.conf` name.
    pub fn from_name(name: &str) -> Option<AuthMethod> {
        Self::ALL.into_iter().find(|method| method.as_str() == name)
    }

    /// Comma-separated list of accepted names, for error messages.
    pub fn accepted_names() -> String {
        Self::ALL.iter().map(|m| m.as_str()).collect::<Vec<_>>().join(", ")
    }
}

impl fmt::Display for AuthMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
