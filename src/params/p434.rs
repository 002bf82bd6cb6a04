//! SIKEp434 parameter tables: prime, Montgomery constants, torsion
//! bases of the starting curve E6 and the walk strategies.

#![allow(clippy::unreadable_literal)]

use crate::fp::{FieldParams, Fp};
use crate::fp2::Fp2;
use crate::params::{DomainParams, ParamId, Params};

// p = 2^216*3^137 - 1
pub(crate) static FIELD: FieldParams = FieldParams {
    nwords: 7,
    bytelen: 55,
    p: Fp([
        0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF, 0xFDC1767AE2FFFFFF,
        0x7BC65C783158AEA3, 0x6CFC5FD681C52056, 0x0002341F27177344, 0x0000000000000000,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
    ]),
    p2: Fp([
        0xFFFFFFFFFFFFFFFE, 0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF, 0xFB82ECF5C5FFFFFF,
        0xF78CB8F062B15D47, 0xD9F8BFAD038A40AC, 0x0004683E4E2EE688, 0x0000000000000000,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
    ]),
    r2: Fp([
        0x28E55B65DCD69B30, 0xACEC7367768798C2, 0xAB27973F8311688D, 0x175CC6AF8D6C7C0B,
        0xABCD92BF2DDE347E, 0x69E16A61C7686D9A, 0x000025A89BCDD12A, 0x0000000000000000,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
    ]),
    mont_one: Fp([
        0x000000000000742C, 0x0000000000000000, 0x0000000000000000, 0xB90FF404FC000000,
        0xD801A4FB559FACD4, 0xE93254545F77410C, 0x0000ECEEA7BD2EDA, 0x0000000000000000,
        0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
    ]),
};

static STRATEGY_A: [u32; 107] = [
    43, 28, 16, 9, 5, 3, 2, 1, 1, 1, 1, 2, 1, 1, 1, 4, 2, 1, 1, 1, 2, 1, 1, 7, 4, 2, 1, 1, 1,
    2, 1, 1, 3, 2, 1, 1, 1, 1, 12, 7, 4, 2, 1, 1, 1, 2, 1, 1, 3, 2, 1, 1, 1, 1, 5, 3, 2, 1, 1,
    1, 1, 2, 1, 1, 1, 16, 11, 7, 4, 2, 1, 1, 1, 2, 1, 1, 3, 2, 1, 1, 1, 1, 4, 3, 2, 1, 1, 1, 1,
    2, 1, 1, 7, 4, 2, 1, 1, 1, 2, 1, 1, 3, 2, 1, 1, 1, 1,
];

static STRATEGY_B: [u32; 136] = [
    48, 34, 21, 13, 8, 5, 3, 2, 1, 1, 1, 1, 1, 2, 1, 1, 1, 3, 2, 1, 1, 1, 1, 1, 5, 3, 2, 1, 1,
    1, 1, 1, 2, 1, 1, 1, 8, 5, 3, 2, 1, 1, 1, 1, 1, 2, 1, 1, 1, 3, 2, 1, 1, 1, 1, 1, 13, 8, 5,
    3, 2, 1, 1, 1, 1, 1, 2, 1, 1, 1, 3, 2, 1, 1, 1, 1, 1, 5, 3, 2, 1, 1, 1, 1, 1, 2, 1, 1, 1,
    14, 13, 8, 5, 3, 2, 1, 1, 1, 1, 1, 2, 1, 1, 1, 3, 2, 1, 1, 1, 1, 1, 5, 3, 2, 1, 1, 1, 1, 1,
    2, 1, 1, 1, 5, 3, 2, 1, 1, 1, 1, 1, 1, 2, 1, 1, 1,
];

pub(crate) static PARAMS: Params = Params {
    id: ParamId::Fp434,
    field: &FIELD,
    msg_len: 16,
    kem_size: 16,
    public_key_size: 330,
    shared_secret_size: 110,
    ciphertext_size: 346,
    a: DomainParams {
        e: 216,
        secret_bit_len: 216,
        secret_byte_len: 27,
        strategy: &STRATEGY_A,
        // x(P), x(Q), x(P-Q) of the 3^137-torsion basis (Montgomery form);
        // their images under the 2-power isogeny form the A-side public key.
        pub_points: [
            Fp2 {
                a: Fp([
                    0x8E96D668A1066654, 0x22343408C652B61C, 0xE34F77EE7F1B059D, 0x78D68D25B7275B17,
                    0xDFE5EC3C360DEE9F, 0x6033770A7BBAC3FB, 0x00003AC275A74940, 0x0000000000000000,
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
                    0x79490B6383109E7A, 0x2ED3D6902924A34A, 0x0ACE623564CD4636, 0x88413949CE982509,
                    0x2A7192F03C92915A, 0xB588741B201D4A29, 0x0000DD3D75835648, 0x0000000000000000,
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
                    0x573AE11374E163E1, 0x755F10416A856033, 0x5E82BF8A16877000, 0xC31D6FB40ED5DDEA,
                    0xF07E5429623A2034, 0xEF3062FADD76AD06, 0x00009FD6261BB210, 0x0000000000000000,
                    0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
                ]),
                b: Fp([
                    0x7A59F3F2494DB8D8, 0x0B7CF7894063C8EE, 0xE881AD04919570E6, 0x36FEF0BBB36B779B,
                    0x6AE846510436E9C8, 0x258E0FE8C0939A03, 0x000115BB1503E887, 0x0000000000000000,
                    0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
                ]),
            },
        ],
    },
    b: DomainParams {
        e: 137,
        secret_bit_len: 217,
        secret_byte_len: 28,
        strategy: &STRATEGY_B,
        // x(P), x(Q), x(P-Q) of the 2^216-torsion basis (Montgomery form);
        // their images under the 3-power isogeny form the B-side public key.
        pub_points: [
            Fp2 {
                a: Fp([
                    0x05ADF455C5C345BF, 0x91935C5CC767AC2B, 0xAFE4E879951F0257, 0x70E792DC89FA27B1,
                    0xF797F526BB48C8CD, 0x2181DB6131AF621F, 0x00000A1C08B1ECC4, 0x0000000000000000,
                    0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
                ]),
                b: Fp([
                    0x74840EB87CDA7788, 0x2971AA0ECF9F9D0B, 0xCB5732BDF41715D5, 0x8CD8E51F7AACFFAA,
                    0xA7F424730D7E419F, 0xD671EB919A179E8C, 0x0000FFA26C5A924A, 0x0000000000000000,
                    0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
                ]),
            },
            Fp2 {
                a: Fp([
                    0xFEC6E64588B7273B, 0xD2A626D74CBBF1C6, 0xF8F58F07A78098C7, 0xE23941F470841B03,
                    0x1B63EDA2045538DD, 0x735CFEB0FFD49215, 0x0001C4CB77542876, 0x0000000000000000,
                    0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
                ]),
                b: Fp([
                    0xADB0F733C17FFDD6, 0x6AFFBD037DA0A050, 0x680EC43DB144E02F, 0x1E2E5D5FF524E374,
                    0xE2DDA115260E2995, 0xA6E4B552E2EDE508, 0x00018ECCDDF4B53E, 0x0000000000000000,
                    0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
                ]),
            },
            Fp2 {
                a: Fp([
                    0x01BA4DB518CD6C7D, 0x2CB0251FE3CC0611, 0x259B0C6949A9121B, 0x60E17AC16D2F82AD,
                    0x3AA41F1CE175D92D, 0x413FBE6A9B9BC4F3, 0x00022A81D8D55643, 0x0000000000000000,
                    0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
                ]),
                b: Fp([
                    0xB8ADBC70FC82E54A, 0xEF9CDDB0D5FADDED, 0x5820C734C80096A0, 0x7799994BAA96E0E4,
                    0x044961599E379AF8, 0xDB2B94FBF09F27E2, 0x0000B87FC716C0C6, 0x0000000000000000,
                    0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
                ]),
            },
        ],
    },
};
