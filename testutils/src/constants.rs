pub const TEST_NAMESPACE: &str = "test-namespace";
pub const TEST_POD_NAME: &str = "the-pod";
pub const TEST_POD_UID: &str = "the-pod-uid";
pub const TEST_POD_IP: &str = "1.2.3.4";
pub const TEST_PORT_NAME: &str = "redis";
pub const TEST_PORT: u16 = 6379;
pub const TEST_TARGET: &str = "1.2.3.4:6379";
