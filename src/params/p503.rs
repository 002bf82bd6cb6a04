//! SIKEp503 parameter tables: prime, Montgomery constants, torsion
//! bases of the starting curve E6 and the walk strategies.

#![allow(clippy::unreadable_literal)]

use crate::fp::{FieldParams, Fp};
use crate::fp2::Fp2;
use crate::params::{DomainParams, ParamId, Params};

// p = 2^250*3^159 - 1
pub(crate) static FIELD: FieldParams = FieldParams {
    nwords: 8,
    bytelen: 63,
    p: Fp([
        0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF, 0xABFFFFFFFFFFFFFF,
        0x13085BDA2211E7A0, 0x1B9BF6C87B7E7DAF, 0x6045C6BDDA77A4D0, 0x004066F541811E1E,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
    ]),
    p2: Fp([
        0xFFFFFFFFFFFFFFFE, 0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF, 0x57FFFFFFFFFFFFFF,
        0x2610B7B44423CF41, 0x3737ED90F6FCFB5E, 0xC08B8D7BB4EF49A0, 0x0080CDEA83023C3C,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
    ]),
    r2: Fp([
        0x5289A0CF641D011F, 0x9B88257189FED2B9, 0xA3B365D58DC8F17A, 0x5BC57AB6EFF168EC,
        0x9E51998BD84D4423, 0xBF8999CBAC3B5695, 0x46E9127BCE14CDB6, 0x003F6CFCE8B81771,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
    ]),
    mont_one: Fp([
        0x00000000000003F9, 0x0000000000000000, 0x0000000000000000, 0xB400000000000000,
        0x63CB1A6EA6DED2B4, 0x51689D8D667EB37D, 0x8ACD77C71AB24142, 0x0026FBAEC60F5953,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
    ]),
};

static STRATEGY_A: [u32; 124] = [
    49, 28, 20, 12, 7, 4, 2, 1, 1, 1, 2, 1, 1, 3, 2, 1, 1, 1, 1, 5, 3, 2, 1, 1, 1, 1, 2, 1, 1,
    1, 8, 5, 3, 2, 1, 1, 1, 1, 2, 1, 1, 1, 3, 2, 1, 1, 1, 1, 1, 12, 7, 4, 2, 1, 1, 1, 2, 1, 1,
    3, 2, 1, 1, 1, 1, 5, 3, 2, 1, 1, 1, 1, 2, 1, 1, 1, 21, 12, 7, 4, 2, 1, 1, 1, 2, 1, 1, 3, 2,
    1, 1, 1, 1, 5, 3, 2, 1, 1, 1, 1, 2, 1, 1, 1, 9, 5, 3, 2, 1, 1, 1, 1, 2, 1, 1, 1, 4, 2, 1,
    1, 1, 2, 1, 1,
];

static STRATEGY_B: [u32; 158] = [
    55, 34, 21, 15, 13, 8, 5, 3, 2, 1, 1, 1, 1, 1, 2, 1, 1, 1, 3, 2, 1, 1, 1, 1, 1, 5, 3, 2, 1,
    1, 1, 1, 1, 2, 1, 1, 1, 5, 3, 2, 2, 1, 1, 1, 1, 1, 1, 2, 1, 1, 1, 8, 5, 3, 2, 1, 1, 1, 1,
    1, 2, 1, 1, 1, 3, 2, 1, 1, 1, 1, 1, 13, 8, 5, 3, 2, 1, 1, 1, 1, 1, 2, 1, 1, 1, 3, 2, 1, 1,
    1, 1, 1, 5, 3, 2, 1, 1, 1, 1, 1, 2, 1, 1, 1, 21, 13, 8, 5, 3, 2, 1, 1, 1, 1, 1, 2, 1, 1, 1,
    3, 2, 1, 1, 1, 1, 1, 5, 3, 2, 1, 1, 1, 1, 1, 2, 1, 1, 1, 8, 5, 3, 2, 1, 1, 1, 1, 1, 2, 1,
    1, 1, 3, 2, 1, 1, 1, 1, 1,
];

pub(crate) static PARAMS: Params = Params {
    id: ParamId::Fp503,
    field: &FIELD,
    msg_len: 24,
    kem_size: 24,
    public_key_size: 378,
    shared_secret_size: 126,
    ciphertext_size: 402,
    a: DomainParams {
        e: 250,
        secret_bit_len: 250,
        secret_byte_len: 32,
        strategy: &STRATEGY_A,
        // x(P), x(Q), x(P-Q) of the 3^159-torsion basis (Montgomery form);
        // their images under the 2-power isogeny form the A-side public key.
        pub_points: [
            Fp2 {
                a: Fp([
                    0xF5D0F9EA2F5153DC, 0x85858860CD78115A, 0x78FA3C276B63C94A, 0x9B21FAD3EDB4C160,
                    0x24E05EDEE5CDCC55, 0x36448DEB52EA6D86, 0x2C779BAE616B9527, 0x001B4054314DF7B3,
                    0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
                ]),
                b: Fp([
                    0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
                    0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
                    0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
                ]),
            },
            Fp2 {
                a: Fp([
                    0x5FF732DC5C9F8074, 0x8341E438ED48C045, 0xF7C17E9C88904EAD, 0xEC2FAFDF8851A017,
                    0x808ABDBCA11A418F, 0x1CC9777C0D5547B0, 0xEDD6AC1656F7C759, 0x002DBB048DB65C02,
                    0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
                ]),
                b: Fp([
                    0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
                    0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
                    0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
                ]),
            },
            Fp2 {
                a: Fp([
                    0x8CF4CFB9751D088C, 0x93A4702E6AF2DF75, 0x5238D325B7AE6611, 0x67C580F57B444FD2,
                    0x271E28FD76E8D919, 0xA02F6D3C62A4BD74, 0x77AB22C7D1B00680, 0x002EF765CF327BA6,
                    0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
                ]),
                b: Fp([
                    0xE53FEE9C795AE35B, 0x3AFBD54E9BF80E3B, 0x979C531733C6E067, 0x2079B8E379809C4B,
                    0x3F8063AC3DDBB7A7, 0x0A41D6A69C99EE64, 0xE80E6456AE2F2407, 0x00246E7BCC3573F0,
                    0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
                ]),
            },
        ],
    },
    b: DomainParams {
        e: 159,
        secret_bit_len: 252,
        secret_byte_len: 32,
        strategy: &STRATEGY_B,
        // x(P), x(Q), x(P-Q) of the 2^250-torsion basis (Montgomery form);
        // their images under the 3-power isogeny form the B-side public key.
        pub_points: [
            Fp2 {
                a: Fp([
                    0x5D083011589AD893, 0xADFD8D2CB67D0637, 0x330C9AC34FFB6361, 0xF0D47489A2E805A2,
                    0x27E2789259C6B8DC, 0x63866A2C121931B9, 0x8D4C65A7137DCF44, 0x003A183AE5967B3F,
                    0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
                ]),
                b: Fp([
                    0x7E3541B8C96D1519, 0xD3ADAEEC0D61A26C, 0xC0A2219CE7703DD9, 0xFF3E46658FCDBC52,
                    0xD5B38DEAE6E196FF, 0x1AAC826364956D58, 0xEC9F4875B9A5F27A, 0x001B0B475AB99843,
                    0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
                ]),
            },
            Fp2 {
                a: Fp([
                    0x4D83695107D03BAD, 0x221F3299005E2FCF, 0x78E6AE22F30DECF2, 0x6D982DB5111253E4,
                    0x504C80A8AB4526A8, 0xEFD0C3AA210BB024, 0xCB77483501DC6FCF, 0x001052544A96BDF3,
                    0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
                ]),
                b: Fp([
                    0x0D74FE3402BCAE47, 0xDF5B8CDA832D8AED, 0xB86BCF06E4BD837E, 0x892A2933A0FA1F63,
                    0x9F88FC67B6CCB461, 0x822926EA9DDA3AC8, 0xEAC8DDE5855425ED, 0x000618FE6DA37A80,
                    0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
                ]),
            },
            Fp2 {
                a: Fp([
                    0x1D9D32D2DC877C17, 0x5517CD8F71D5B02B, 0x395AFB8F6B60C117, 0x3AE31AC85F9098C8,
                    0x5F5341C198450848, 0xF8C609DBEA435C6A, 0xD832BC7EDC7BA5E4, 0x002AD98AA6968BF5,
                    0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
                ]),
                b: Fp([
                    0xC466CAB0F73C2E5B, 0x7B1817148FB2CF9C, 0x873E87C099E470A0, 0xBB17AC6D17A7BAC1,
                    0xA146FDCD0F2E2A58, 0x88B311E9CEAB6201, 0x37604CF5C7951757, 0x0006804071C74BF9,
                    0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
                ]),
            },
        ],
    },
};
