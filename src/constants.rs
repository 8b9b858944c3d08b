use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

// Query parameters used by the signing protocol.
pub const X_AMZ_ALGORITHM: &str = "X-Amz-Algorithm";
pub const X_AMZ_CREDENTIAL: &str = "X-Amz-Credential";
pub const X_AMZ_DATE: &str = "X-Amz-Date";
pub const X_AMZ_EXPIRES: &str = "X-Amz-Expires";
pub const X_AMZ_SIGNED_HEADERS: &str = "X-Amz-SignedHeaders";
pub const X_AMZ_SIGNATURE: &str = "X-Amz-Signature";
pub const X_AMZ_SECURITY_TOKEN: &str = "X-Amz-Security-Token";

// Header carrying the session token when signing into the Authorization header.
pub const X_AMZ_SECURITY_TOKEN_HEADER: &str = "x-amz-security-token";

// Env values used for ambient credential discovery.
pub const AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
pub const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
pub const AWS_SESSION_TOKEN: &str = "AWS_SESSION_TOKEN";

/// Signing algorithm identifier.
pub const ALGORITHM: &str = "AWS4-HMAC-SHA256";

/// Credential scope terminator.
pub const AWS4_REQUEST: &str = "aws4_request";

// Query parameters identifying the connect intent and the principal.
pub const ACTION: &str = "Action";
pub const ACTION_CONNECT: &str = "connect";
pub const USER: &str = "User";

/// Hex encoded SHA-256 digest of the empty byte sequence.
///
/// The synthetic request never carries a body, so the payload hash is this
/// constant rather than something recomputed per call.
pub const EMPTY_PAYLOAD_SHA256: &str =
    "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

/// Seconds a generated token stays valid.
pub const TOKEN_VALIDITY_SECONDS: u64 = 900;

/// Service identifier for Amazon ElastiCache.
pub const SERVICE_ELASTICACHE: &str = "elasticache";

/// Service identifier for Amazon MemoryDB.
pub const SERVICE_MEMORYDB: &str = "memorydb";

/// AsciiSet for [AWS UriEncode](https://docs.aws.amazon.com/AmazonS3/latest/API/sig-v4-header-based-auth.html)
///
/// - URI encode every byte except the unreserved characters: 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
pub static URI_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'/')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// AsciiSet for [AWS UriEncode](https://docs.aws.amazon.com/AmazonS3/latest/API/sig-v4-header-based-auth.html)
///
/// But used in query.
pub static QUERY_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
