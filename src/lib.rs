#![no_std]
#![deny(clippy::pedantic)]
#![deny(warnings)]
#![deny(missing_docs)]
// The t0..t5 temporaries throughout the curve and isogeny formulas mirror
// the register names of the SIKE specification pseudocode.
#![allow(clippy::similar_names)]
#![doc = include_str!("../README.md")]

// Implements the SIKE key encapsulation mechanism and the underlying SIDH
// primitive over the p434, p503 and p751 parameter sets.
// See <https://sike.org/files/SIDH-spec.pdf>
//
// Functionality map per the SIKE specification (v3.4)
//
// Montgomery field arithmetic GF(p), GF(p^2)              --> fp.rs, fp2.rs
// Algorithm 3  xDBL                                       --> curve.rs
// Algorithm 5  xDBLADD                                    --> curve.rs
// Algorithm 6  xTPL                                       --> curve.rs
// Algorithm 8  Ladder3pt                                  --> curve.rs
// Algorithm 9  j_inv                                      --> curve.rs
// Algorithm 10 get_A (Okeya-Sakurai recovery)             --> curve.rs
// Algorithm 13/14 get_4_isog / eval_4_isog                --> isogeny.rs
// Algorithm 15/16 get_3_isog / eval_3_isog                --> isogeny.rs
// Optimal-strategy tree traversal (sec. 1.3.7)            --> isogeny.rs
// isogen_2/isogen_3, isoex_2/isoex_3 (sec. 1.3.5-1.3.6)   --> sidh.rs
// PKE Enc/Dec and KEM Encaps/Decaps (sec. 1.4)            --> sike.rs
// Multi-recipient KEM (one ephemeral, many recipients)    --> mkem.rs
// Key containers, serialisation, scalar sampling          --> key.rs
// Per-prime constants and table-driven dispatch           --> params/
//
// The three parameter sets share one generic engine working on max-width
// limb arrays; the per-set tables carry the prime, the Montgomery
// constants, the torsion bases and the traversal strategies.

extern crate alloc;

mod curve;
mod fp;
mod fp2;
mod helpers;
mod isogeny;
mod key;
mod mkem;
mod params;
mod sidh;
mod sike;

pub use key::{KeyVariant, PrivateKey, PublicKey};
pub use mkem::MultiKem;
pub use params::ParamId;
pub use sike::Sike;

/// Largest SIDH shared secret (j-invariant) over the supported parameter
/// sets, in bytes; sized for p751.
pub const MAX_SHARED_SECRET_SIZE: usize = 188;
/// Largest SIKE message / KEM secret length, in bytes.
pub const MAX_MSG_LEN: usize = 32;
/// Largest serialized public key, in bytes.
pub const MAX_PUBLIC_KEY_SIZE: usize = 564;
/// Largest SIKE ciphertext, in bytes.
pub const MAX_CIPHERTEXT_SIZE: usize = 596;
/// Largest serialized SIKE private key (`s ‖ scalar`), in bytes.
pub const MAX_SIKE_PRIVATE_KEY_SIZE: usize = 80;

/// Largest secret scalar, in bytes (p751 B side).
pub(crate) const MAX_SECRET_BYTE_LEN: usize = 48;

#[cfg(test)]
pub(crate) mod test_vectors {
    //! Fixed B-side SIKE keypairs, one per parameter set, shared by the
    //! PKE/KEM tests.

    #[cfg(feature = "p434")]
    pub(crate) const PKB_434: &str =
        "1BD0A2E81307B6F96461317DDF535ACC0E59C742627BAE60D27605E10FAF722D\
         22A73E184CB572A12E79DCD58C6B54FB01442114CBE9010B6CAEC25D04C16C5E\
         42540C1524C545B8C67614ED4183C9FA5BD0BE45A7F89FBC770EE8E7E5E391C7\
         EE6F35F74C29E6D9E35B1663DA01E48E9DEB2347512D366FDE505161677055E3\
         EF23054D276E817E2C57025DA1C10D2461F68617F2D11256EEE4E2D7DBDF6C8E\
         34F3A0FD00C625428CB41857002159DAB94267ABE42D630C6AAA91AF837C7A67\
         40754EA6634C45454C51B0BB4D44C3CCCCE4B32C00901CF69C008D013348379B\
         2F9837F428A01B6173584691F2A6F3A3C4CF487D20D261B36C8CDB1BC158E2A5\
         162A9DA4F7A97AA0879B9897E2B6891B672201F9AEFBF799C27B2587120AC586\
         A511360926FB7DA8EBF5CB5272F396AE06608422BE9792E2CE9BEF21BF55B7EF\
         F8DC7EC8C99910D3F800";
    #[cfg(feature = "p434")]
    pub(crate) const PRB_434: &str =
        "4B622DE1350119C45A9F2E2EF3DC5DF56A27FCDFCDDAF58CD69B903752D68C20\
         0934E160B234E49EDE247601";

    #[cfg(feature = "p503")]
    pub(crate) const PKB_503: &str =
        "4032A90B6C036B7D2A83878AD116641AD319E420235A505F3F5C3DEC27C87A6C\
         BA0792201D6E7B196C582D43CAF86CB2C7DEFA6598B543C946CDDF62EF9A328C\
         8719B66BA5052231DAE13AF7D9CDEBB4ED327773C7AE0818F41AF1D28CD78B16\
         C996232528235C8392B8FCFD925CB311B2A801B0402A90E527261EA32F2BEF67\
         7C544908D5509B8AB7D7BF20456727AD358AD585306A0B28F6B2AA583CE8A3E0\
         BB92D8CD55347D39D4E3C30D3D0F96EABB721A6968CDD143FE9227643CF697FB\
         2DF0B71322B5EA1505D0DDBF70A2FD1193011F3BC18AA1E127C614B76969DCDA\
         45A2072B519A1074FDA49F5C828450C6A007BF8D7CDDD5D2FC112119C679CA3A\
         B16C6960B25F6C681A7DCED0F0E3901740D3DBF3A33011EB7DA460E8ADA80EE3\
         45B2B71420950A9A803E4F11330EB91CCABB1EEE4D875A109D7724ABD201272C\
         0B4981BDCDFA70F3430A89D2A88EEED474CF0CFAC65CE883F44B4722FA280C6F\
         A9C4724D414B35AF69D6ECB21BFDA23BFF6B66C22C2451DC8E1C";
    #[cfg(feature = "p503")]
    pub(crate) const PRB_503: &str =
        "7BF6938C975658AEB8B4D37CFFBDE25D97E561F36C219A0E8FE645816DBBC7ED7B57\
         7700AE8DC3138E97A0C3F6F002065C92A0B1B8180208";

    #[cfg(feature = "p751")]
    pub(crate) const PKB_751: &str =
        "E1A758EC0D418BFE86D8077B5BB169133C06C1F2A067D8B202D9D058FFC51F63\
         FD26155A6577C74BA7F1A27E7BA51982517B923615DEB00BE408920A07831DF5\
         978CFDDD0BF690A264353A4A16B666F90586D7F89A193CE09375D389C1379A7A\
         528581C3ACB002CD2DC4F0FD672568FF9050BA8365C7FEFC5E6ED089B921DE68\
         04091A0744DE3EB14D426A3F7DA215C50312617C1C2697243980D06056F2CCE8\
         8AE7AE73C7343C0B7104C9F2870A94FED744CF6E94630514B6CEAB0E64733BB6\
         FA67B931E5D8206010475CBE8BC587248D65D89D8CD9C8BBFA93E8B5F9EB9130\
         773DED665D52ABBD91C4C8C255F73C0FC82501AE33330E9F308DE7177CBF83E4\
         E26E334D7CB09019E638147FC58ED372AF660F14C194BC80E9666325C98E0F80\
         877271D4A6BF514F603703D8A697874CD50A34D92F5AAEA84633CCF96801BD51\
         7BF425DEE4A32AAF06684052473EA14643C3D535440FB2240A988D09F297C5A3\
         88CB3DE60ED943F124034B90EFF611221F80F78EC124956338A105F6636B063D\
         7E48BFBD5D614310FB97D86F122E4AE6F9DDF4977A93ED7D0CE2A94E346A1A03\
         D3219CF21907B85A5BCDC713F93A4406A22E03B1655A66E1F6741A2F953E6FE0\
         868B2614BABEF1943BBBCB1B66D3E7017E533EA84F291240B56AB33EF1DC3F3D\
         E99DBF9E8BE51A0076E462BCDD825EA96D7F63C99177C305C257B31461F4C23D\
         43115F0220409E8880BBB2468586D03461E807BE824B693874911B2B52AF06FD\
         BDC47F5A0159729641A7C950AB9E03F2DC045135";
    #[cfg(feature = "p751")]
    pub(crate) const PRB_751: &str =
        "0001020304050607080900010203040506070809000102030405060708090102\
         8626ED79D451140800E03B59B956F8210E556067407D13DC90FA9E8B872BFB8F\
         AB0A7289852106E40538D3575C500201";
}
