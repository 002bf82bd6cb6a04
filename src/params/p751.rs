//! SIKEp751 parameter tables: prime, Montgomery constants, torsion
//! bases of the starting curve E6 and the walk strategies.

#![allow(clippy::unreadable_literal)]

use crate::fp::{FieldParams, Fp};
use crate::fp2::Fp2;
use crate::params::{DomainParams, ParamId, Params};

// p = 2^372*3^239 - 1
pub(crate) static FIELD: FieldParams = FieldParams {
    nwords: 12,
    bytelen: 94,
    p: Fp([
        0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFFFF, 0xEEAFFFFFFFFFFFFF, 0xE3EC968549F878A8, 0xDA959B1A13F7CC76,
        0x084E9867D6EBE876, 0x8562B5045CB25748, 0x0E12909F97BADC66, 0x00006FE5D541F71C,
    ]),
    p2: Fp([
        0xFFFFFFFFFFFFFFFE, 0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF,
        0xFFFFFFFFFFFFFFFF, 0xDD5FFFFFFFFFFFFF, 0xC7D92D0A93F0F151, 0xB52B363427EF98ED,
        0x109D30CFADD7D0ED, 0x0AC56A08B964AE90, 0x1C25213F2F75B8CD, 0x0000DFCBAA83EE38,
    ]),
    r2: Fp([
        0x233046449DAD4058, 0xDB010161A696452A, 0x5E36941472E3FD8E, 0xF40BFE2082A2E706,
        0x4932CCA8904F8751, 0x1F735F1F1EE7FC81, 0xA24F4D80C1048E18, 0xB56C383CCDB607C5,
        0x441DD47B735F9C90, 0x5673ED2C6A6AC82A, 0x06C905261132294B, 0x000041AD830F1F35,
    ]),
    mont_one: Fp([
        0x00000000000249AD, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
        0x0000000000000000, 0x8310000000000000, 0x5527B1E4375C6C66, 0x697797BF3F4F24D0,
        0xC89DB7B2AC5C4E2E, 0x4CA4B439D2076956, 0x10F7926C7512C7E9, 0x00002D5B24BCE5E2,
    ]),
};

static STRATEGY_A: [u32; 185] = [
    72, 49, 28, 16, 9, 5, 3, 2, 1, 1, 1, 1, 2, 1, 1, 1, 4, 2, 1, 1, 1, 2, 1, 1, 7, 4, 2, 1, 1,
    1, 2, 1, 1, 3, 2, 1, 1, 1, 1, 12, 7, 4, 2, 1, 1, 1, 2, 1, 1, 3, 2, 1, 1, 1, 1, 5, 3, 2, 1,
    1, 1, 1, 2, 1, 1, 1, 21, 12, 7, 4, 2, 1, 1, 1, 2, 1, 1, 3, 2, 1, 1, 1, 1, 5, 3, 2, 1, 1, 1,
    1, 2, 1, 1, 1, 9, 5, 3, 2, 1, 1, 1, 1, 2, 1, 1, 1, 4, 2, 1, 1, 1, 2, 1, 1, 28, 16, 12, 7,
    4, 2, 1, 1, 1, 2, 1, 1, 3, 2, 1, 1, 1, 1, 5, 3, 2, 1, 1, 1, 1, 2, 1, 1, 1, 7, 4, 2, 1, 1,
    1, 2, 1, 1, 3, 2, 1, 1, 1, 1, 12, 7, 4, 2, 1, 1, 1, 2, 1, 1, 3, 2, 1, 1, 1, 1, 5, 3, 2, 1,
    1, 1, 1, 2, 1, 1, 1,
];

static STRATEGY_B: [u32; 238] = [
    89, 55, 34, 21, 13, 8, 6, 5, 3, 2, 1, 1, 1, 1, 1, 2, 1, 1, 1, 2, 1, 1, 1, 1, 3, 2, 1, 1, 1,
    1, 1, 5, 3, 2, 1, 1, 1, 1, 1, 2, 1, 1, 1, 8, 5, 3, 2, 1, 1, 1, 1, 1, 2, 1, 1, 1, 3, 2, 1,
    1, 1, 1, 1, 13, 8, 5, 3, 2, 1, 1, 1, 1, 1, 2, 1, 1, 1, 3, 2, 1, 1, 1, 1, 1, 5, 3, 2, 1, 1,
    1, 1, 1, 2, 1, 1, 1, 21, 13, 8, 5, 3, 2, 1, 1, 1, 1, 1, 2, 1, 1, 1, 3, 2, 1, 1, 1, 1, 1, 5,
    3, 2, 1, 1, 1, 1, 1, 2, 1, 1, 1, 8, 5, 3, 2, 1, 1, 1, 1, 1, 2, 1, 1, 1, 3, 2, 1, 1, 1, 1,
    1, 34, 21, 13, 8, 5, 3, 2, 1, 1, 1, 1, 1, 2, 1, 1, 1, 3, 2, 1, 1, 1, 1, 1, 5, 3, 2, 1, 1,
    1, 1, 1, 2, 1, 1, 1, 8, 5, 3, 2, 1, 1, 1, 1, 1, 2, 1, 1, 1, 3, 2, 1, 1, 1, 1, 1, 13, 8, 5,
    3, 2, 1, 1, 1, 1, 1, 2, 1, 1, 1, 3, 2, 1, 1, 1, 1, 1, 5, 3, 2, 1, 1, 1, 1, 1, 2, 1, 1, 1,
];

pub(crate) static PARAMS: Params = Params {
    id: ParamId::Fp751,
    field: &FIELD,
    msg_len: 32,
    kem_size: 32,
    public_key_size: 564,
    shared_secret_size: 188,
    ciphertext_size: 596,
    a: DomainParams {
        e: 372,
        secret_bit_len: 372,
        secret_byte_len: 47,
        strategy: &STRATEGY_A,
        // x(P), x(Q), x(P-Q) of the 3^239-torsion basis (Montgomery form);
        // their images under the 2-power isogeny form the A-side public key.
        pub_points: [
            Fp2 {
                a: Fp([
                    0x11046A0165DEC66B, 0x53D8B2F38C242CB2, 0xD412182C2631E8D4, 0xBD3B45AA74852BA0,
                    0x954D53071FE60E7F, 0x44EE2758ADEE239A, 0x2776B02544C7BFE7, 0xA6BE1198650E5B75,
                    0x90D2E6D9364DD87F, 0x36FC3B601707875B, 0x768DC8E871784FD7, 0x00002D72040BF997,
                ]),
                b: Fp([
                    0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
                    0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
                    0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
                ]),
            },
            Fp2 {
                a: Fp([
                    0x2E0D1D363CA6633C, 0xE1A17692A3231EF8, 0xFBD02C077D24BCAE, 0xBAA5C761E0418C74,
                    0x3E6C61FAB1B890B4, 0x0DCE7FEABCF4DF6E, 0x6D73033986A967A8, 0x66AD2EFE19924C90,
                    0x8164811ADAF95A5C, 0x61EA7B9B5311DABA, 0x0DEC8681D7F3B177, 0x00005D7FDE6C9D19,
                ]),
                b: Fp([
                    0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
                    0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
                    0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000,
                ]),
            },
            Fp2 {
                a: Fp([
                    0x63B289739317AAF9, 0x1F003961726F67AF, 0x4BFE852F7DEFD5AD, 0x9A394C9FC83F2CAC,
                    0x943F1BC013B42CFC, 0x8499FA2E935D301B, 0xD1E8F20FF52D37AB, 0xF202D115D095EDAA,
                    0xF40A17A0CA809363, 0x5F4200D82750FAE2, 0x8FDE12BA5BFCBDA3, 0x00006551D2B735ED,
                ]),
                b: Fp([
                    0x1BA8931A1C95F599, 0x8C1724597D5D1111, 0x5DB26249778E6A3E, 0x2E91F1311E58D293,
                    0xF0D9CCBAA2D4331B, 0xC7ED1EF1A4BB08CA, 0x13D58299BC25CFC9, 0xD39B604DC8D96CB1,
                    0xB20807AE00204055, 0xB752CE6D4DA00129, 0x56CF9B10E814160D, 0x0000139BFAF31696,
                ]),
            },
        ],
    },
    b: DomainParams {
        e: 239,
        secret_bit_len: 378,
        secret_byte_len: 48,
        strategy: &STRATEGY_B,
        // x(P), x(Q), x(P-Q) of the 2^372-torsion basis (Montgomery form);
        // their images under the 3-power isogeny form the B-side public key.
        pub_points: [
            Fp2 {
                a: Fp([
                    0x884F46B74000BAA8, 0xBA52630F939DEC20, 0xC16FB97BA714A04D, 0x082536745B1AB3DB,
                    0x1117157F446F9E82, 0xD2F27D621A018490, 0x6B24AB523D544BCD, 0x9307D6AA2EA85C94,
                    0xE1A096729528F20F, 0x896446F868F3255C, 0x2401D996B1BFF8A5, 0x00000EF8786A5C0A,
                ]),
                b: Fp([
                    0xAEB78B3B96F59394, 0xAB26681E29C90B74, 0xE520AC30FDC4ACF1, 0x870AAAE3A4B8111B,
                    0xF875BDB738D64EFF, 0x50109A7ECD7ED6BC, 0x4CC64848FF0C56FB, 0xE617CB6C519102C9,
                    0x9C74B3835921E609, 0xC91DDAE4A35A7146, 0x7FC82A155C1B9129, 0x0000214FA6B980B3,
                ]),
            },
            Fp2 {
                a: Fp([
                    0x0F93CC38680A8CA9, 0x762E733822E7FED7, 0xE549F005AC0ADB67, 0x94A71FDD2C43A4ED,
                    0xD48645C2B04721C5, 0x432DA1FE4D4CA4DC, 0xBC99655FAA7A80E8, 0xB2C6D502BCFD4823,
                    0xEE92F40CA2EC8BDB, 0x7B074132EFB6D16C, 0x3340B46FA38A7633, 0x0000215749657F6C,
                ]),
                b: Fp([
                    0xECFF375BF3079F4C, 0xFBFE74B043E80EF3, 0x17376CBE3C5C7AD1, 0xC06327A7E29CDBF2,
                    0x2111649C438BF3D4, 0xC1F9298261BA2E97, 0x1F9FECE869CFD1C2, 0x01A39B4FC9346D62,
                    0x147CD1D3E82A3C9F, 0xDE84E9D249E533EE, 0x1C48A5ADFB7C578D, 0x000061ACA0B82E1D,
                ]),
            },
            Fp2 {
                a: Fp([
                    0x1600C525D41059F1, 0xA596899A0A1D83F7, 0x6BFDEED6D2B23F35, 0x5C7E707270C23910,
                    0x276CA1A4E8369411, 0xB193651A602925A0, 0x243D239F1CA1F04A, 0x543DC6DA457860AD,
                    0xCDA590F325181DE9, 0xD3AB7ACFDA80B395, 0x6C97468580FDDF7B, 0x0000352A3E5C4C77,
                ]),
                b: Fp([
                    0x9B794F9FD1CC3EE8, 0xDB32E40A9B2FD23E, 0x26192A2542E42B67, 0xA18E94FCA045BCE7,
                    0x96DC1BC38E7CDA2D, 0x9A1D91B752487DE2, 0xCC63763987436DA3, 0x1316717AACCC551D,
                    0xC4C368A4632AFE72, 0x4B6EA85C9CCD5710, 0x7A12CAD582C7BC9A, 0x00001C7E240149BF,
                ]),
            },
        ],
    },
};
