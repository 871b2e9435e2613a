use near_sdk::NearToken;

// License terms: one perpetual license per wallet, from a fixed pool.
pub const MAX_SUPPLY: u64 = 50;

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_IMAGE_URI_LEN: usize = 200;
pub const MAX_PROVENANCE_CID_LEN: usize = 100;

pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);

// Wire invariant: every token_uri starts with exactly this prefix; viewers
// strip it before base64-decoding the manifest.
pub const DATA_URI_PREFIX: &str = "data:application/json;base64,";

pub const LICENSE_DESCRIPTION: &str = "Patent cover for builders of decentralized systems";
pub const PROVENANCE_TRAIT_TYPE: &str = "Provenance CID";

// Pinned license artwork and provenance document, used when a mint leaves
// the fields empty.
pub const DEFAULT_IMAGE_URI: &str = "https://tan-everyday-mite-419.mypinata.cloud/ipfs/bafkreialme2ca3b36nzq5rqqdqaw3k2le4uvgrdxtdj33t2j4sn44amisi";
pub const DEFAULT_PROVENANCE_CID: &str = "https://tan-everyday-mite-419.mypinata.cloud/ipfs/bafkreidc7qbkdsfirbetsu5owm56oeqkhwhqlxpfgjio4qy3xexigod2nq";
