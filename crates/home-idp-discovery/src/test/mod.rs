//! Test fixtures for code that depends on the host's identity provider data.
