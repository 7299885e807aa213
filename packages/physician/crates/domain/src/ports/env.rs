/// Process-environment lookups. Checks never read ambient variables
/// directly; everything goes through this seam.
pub trait EnvProbe: Send + Sync {
    fn get(&self, name: &str) -> Option<String>;
}
