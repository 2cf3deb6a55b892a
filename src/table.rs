// Table of 128-bit approximations of the powers of ten 1e-307..=1e288, the
// exponent range the Eisel-Lemire core can decide without help. Each row is
// the top 128 bits of 10^e, normalized so that bit 127 is set (truncated,
// not rounded), stored as (low, high) words.
//
// Values match the table in Go's strconv/eisel_lemire.go; regenerated from
// exact integer arithmetic.

pub(crate) const SMALLEST_POWER_OF_TEN: i64 = -307;
pub(crate) const LARGEST_POWER_OF_TEN: i64 = 288;

#[rustfmt::skip]
pub(crate) static POWER_OF_TEN: [(u64, u64); 596] = [
    (0xA5D3_B6D4_79F8_E056, 0x8FD0_C162_0630_6BAB), // 1e-307
    (0x8F48_A489_9877_186C, 0xB3C4_F1BA_87BC_8696), // 1e-306
    (0x331A_CDAB_FE94_DE87, 0xE0B6_2E29_29AB_A83C), // 1e-305
    (0x9FF0_C08B_7F1D_0B14, 0x8C71_DCD9_BA0B_4925), // 1e-304
    (0x07EC_F0AE_5EE4_4DD9, 0xAF8E_5410_288E_1B6F), // 1e-303
    (0xC9E8_2CD9_F69D_6150, 0xDB71_E914_32B1_A24A), // 1e-302
    (0xBE31_1C08_3A22_5CD2, 0x8927_31AC_9FAF_056E), // 1e-301
    (0x6DBD_630A_48AA_F406, 0xAB70_FE17_C79A_C6CA), // 1e-300
    (0x092C_BBCC_DAD5_B108, 0xD64D_3D9D_B981_787D), // 1e-299
    (0x25BB_F560_08C5_8EA5, 0x85F0_4682_93F0_EB4E), // 1e-298
    (0xAF2A_F2B8_0AF6_F24E, 0xA76C_5823_38ED_2621), // 1e-297
    (0x1AF5_AF66_0DB4_AEE1, 0xD147_6E2C_0728_6FAA), // 1e-296
    (0x50D9_8D9F_C890_ED4D, 0x82CC_A4DB_8479_45CA), // 1e-295
    (0xE50F_F107_BAB5_28A0, 0xA37F_CE12_6597_973C), // 1e-294
    (0x1E53_ED49_A962_72C8, 0xCC5F_C196_FEFD_7D0C), // 1e-293
    (0x25E8_E89C_13BB_0F7A, 0xFF77_B1FC_BEBC_DC4F), // 1e-292
    (0x77B1_9161_8C54_E9AC, 0x9FAA_CF3D_F736_09B1), // 1e-291
    (0xD59D_F5B9_EF6A_2417, 0xC795_830D_7503_8C1D), // 1e-290
    (0x4B05_7328_6B44_AD1D, 0xF97A_E3D0_D244_6F25), // 1e-289
    (0x4EE3_67F9_430A_EC32, 0x9BEC_CE62_836A_C577), // 1e-288
    (0x229C_41F7_93CD_A73F, 0xC2E8_01FB_2445_76D5), // 1e-287
    (0x6B43_5275_78C1_110F, 0xF3A2_0279_ED56_D48A), // 1e-286
    (0x830A_1389_6B78_AAA9, 0x9845_418C_3456_44D6), // 1e-285
    (0x23CC_986B_C656_D553, 0xBE56_91EF_416B_D60C), // 1e-284
    (0x2CBF_BE86_B7EC_8AA8, 0xEDEC_366B_11C6_CB8F), // 1e-283
    (0x7BF7_D714_32F3_D6A9, 0x94B3_A202_EB1C_3F39), // 1e-282
    (0xDAF5_CCD9_3FB0_CC53, 0xB9E0_8A83_A5E3_4F07), // 1e-281
    (0xD1B3_400F_8F9C_FF68, 0xE858_AD24_8F5C_22C9), // 1e-280
    (0x2310_0809_B9C2_1FA1, 0x9137_6C36_D999_95BE), // 1e-279
    (0xABD4_0A0C_2832_A78A, 0xB585_4744_8FFF_FB2D), // 1e-278
    (0x16C9_0C8F_323F_516C, 0xE2E6_9915_B3FF_F9F9), // 1e-277
    (0xAE3D_A7D9_7F67_92E3, 0x8DD0_1FAD_907F_FC3B), // 1e-276
    (0x99CD_11CF_DF41_779C, 0xB144_2798_F49F_FB4A), // 1e-275
    (0x4040_5643_D711_D583, 0xDD95_317F_31C7_FA1D), // 1e-274
    (0x4828_35EA_666B_2572, 0x8A7D_3EEF_7F1C_FC52), // 1e-273
    (0xDA32_4365_0005_EECF, 0xAD1C_8EAB_5EE4_3B66), // 1e-272
    (0x90BE_D43E_4007_6A82, 0xD863_B256_369D_4A40), // 1e-271
    (0x5A77_44A6_E804_A291, 0x873E_4F75_E222_4E68), // 1e-270
    (0x7115_15D0_A205_CB36, 0xA90D_E353_5AAA_E202), // 1e-269
    (0x0D5A_5B44_CA87_3E03, 0xD351_5C28_3155_9A83), // 1e-268
    (0xE858_790A_FE94_86C2, 0x8412_D999_1ED5_8091), // 1e-267
    (0x626E_974D_BE39_A872, 0xA517_8FFF_668A_E0B6), // 1e-266
    (0xFB0A_3D21_2DC8_128F, 0xCE5D_73FF_402D_98E3), // 1e-265
    (0x7CE6_6634_BC9D_0B99, 0x80FA_687F_881C_7F8E), // 1e-264
    (0x1C1F_FFC1_EBC4_4E80, 0xA139_029F_6A23_9F72), // 1e-263
    (0xA327_FFB2_66B5_6220, 0xC987_4347_44AC_874E), // 1e-262
    (0x4BF1_FF9F_0062_BAA8, 0xFBE9_1419_15D7_A922), // 1e-261
    (0x6F77_3FC3_603D_B4A9, 0x9D71_AC8F_ADA6_C9B5), // 1e-260
    (0xCB55_0FB4_384D_21D3, 0xC4CE_17B3_9910_7C22), // 1e-259
    (0x7E2A_53A1_4660_6A48, 0xF601_9DA0_7F54_9B2B), // 1e-258
    (0x2EDA_7444_CBFC_426D, 0x99C1_0284_4F94_E0FB), // 1e-257
    (0xFA91_1155_FEFB_5308, 0xC031_4325_637A_1939), // 1e-256
    (0x7935_55AB_7EBA_27CA, 0xF03D_93EE_BC58_9F88), // 1e-255
    (0x4BC1_558B_2F34_58DE, 0x9626_7C75_35B7_63B5), // 1e-254
    (0x9EB1_AAED_FB01_6F16, 0xBBB0_1B92_8325_3CA2), // 1e-253
    (0x465E_15A9_79C1_CADC, 0xEA9C_2277_23EE_8BCB), // 1e-252
    (0x0BFA_CD89_EC19_1EC9, 0x92A1_958A_7675_175F), // 1e-251
    (0xCEF9_80EC_671F_667B, 0xB749_FAED_1412_5D36), // 1e-250
    (0x82B7_E127_80E7_401A, 0xE51C_79A8_5916_F484), // 1e-249
    (0xD1B2_ECB8_B090_8810, 0x8F31_CC09_37AE_58D2), // 1e-248
    (0x861F_A7E6_DCB4_AA15, 0xB2FE_3F0B_8599_EF07), // 1e-247
    (0x67A7_91E0_93E1_D49A, 0xDFBD_CECE_6700_6AC9), // 1e-246
    (0xE0C8_BB2C_5C6D_24E0, 0x8BD6_A141_0060_42BD), // 1e-245
    (0x58FA_E9F7_7388_6E18, 0xAECC_4991_4078_536D), // 1e-244
    (0xAF39_A475_506A_899E, 0xDA7F_5BF5_9096_6848), // 1e-243
    (0x6D84_06C9_5242_9603, 0x888F_9979_7A5E_012D), // 1e-242
    (0xC8E5_087B_A6D3_3B83, 0xAAB3_7FD7_D8F5_8178), // 1e-241
    (0xFB1E_4A9A_9088_0A64, 0xD560_5FCD_CF32_E1D6), // 1e-240
    (0x5CF2_EEA0_9A55_067F, 0x855C_3BE0_A17F_CD26), // 1e-239
    (0xF42F_AA48_C0EA_481E, 0xA6B3_4AD8_C9DF_C06F), // 1e-238
    (0xF13B_94DA_F124_DA26, 0xD060_1D8E_FC57_B08B), // 1e-237
    (0x76C5_3D08_D6B7_0858, 0x823C_1279_5DB6_CE57), // 1e-236
    (0x5476_8C4B_0C64_CA6E, 0xA2CB_1717_B524_81ED), // 1e-235
    (0xA994_2F5D_CF7D_FD09, 0xCB7D_DCDD_A26D_A268), // 1e-234
    (0xD3F9_3B35_435D_7C4C, 0xFE5D_5415_0B09_0B02), // 1e-233
    (0xC47B_C501_4A1A_6DAF, 0x9EFA_548D_26E5_A6E1), // 1e-232
    (0x359A_B641_9CA1_091B, 0xC6B8_E9B0_709F_109A), // 1e-231
    (0xC301_63D2_03C9_4B62, 0xF867_241C_8CC6_D4C0), // 1e-230
    (0x79E0_DE63_425D_CF1D, 0x9B40_7691_D7FC_44F8), // 1e-229
    (0x9859_15FC_12F5_42E4, 0xC210_9436_4DFB_5636), // 1e-228
    (0x3E6F_5B7B_17B2_939D, 0xF294_B943_E17A_2BC4), // 1e-227
    (0xA705_992C_EECF_9C42, 0x979C_F3CA_6CEC_5B5A), // 1e-226
    (0x50C6_FF78_2A83_8353, 0xBD84_30BD_0827_7231), // 1e-225
    (0xA4F8_BF56_3524_6428, 0xECE5_3CEC_4A31_4EBD), // 1e-224
    (0x871B_7795_E136_BE99, 0x940F_4613_AE5E_D136), // 1e-223
    (0x28E2_557B_5984_6E3F, 0xB913_1798_99F6_8584), // 1e-222
    (0x331A_EADA_2FE5_89CF, 0xE757_DD7E_C074_26E5), // 1e-221
    (0x3FF0_D2C8_5DEF_7621, 0x9096_EA6F_3848_984F), // 1e-220
    (0x0FED_077A_756B_53A9, 0xB4BC_A50B_065A_BE63), // 1e-219
    (0xD3E8_4959_12C6_2894, 0xE1EB_CE4D_C7F1_6DFB), // 1e-218
    (0x6471_2DD7_ABBB_D95C, 0x8D33_60F0_9CF6_E4BD), // 1e-217
    (0xBD8D_794D_96AA_CFB3, 0xB080_392C_C434_9DEC), // 1e-216
    (0xECF0_D7A0_FC55_83A0, 0xDCA0_4777_F541_C567), // 1e-215
    (0xF416_86C4_9DB5_7244, 0x89E4_2CAA_F949_1B60), // 1e-214
    (0x311C_2875_C522_CED5, 0xAC5D_37D5_B79B_6239), // 1e-213
    (0x7D63_3293_366B_828B, 0xD774_85CB_2582_3AC7), // 1e-212
    (0xAE5D_FF9C_0203_3197, 0x86A8_D39E_F771_64BC), // 1e-211
    (0xD9F5_7F83_0283_FDFC, 0xA853_0886_B54D_BDEB), // 1e-210
    (0xD072_DF63_C324_FD7B, 0xD267_CAA8_62A1_2D66), // 1e-209
    (0x4247_CB9E_59F7_1E6D, 0x8380_DEA9_3DA4_BC60), // 1e-208
    (0x52D9_BE85_F074_E608, 0xA461_1653_8D0D_EB78), // 1e-207
    (0x6790_2E27_6C92_1F8B, 0xCD79_5BE8_7051_6656), // 1e-206
    (0x00BA_1CD8_A3DB_53B6, 0x806B_D971_4632_DFF6), // 1e-205
    (0x80E8_A40E_CCD2_28A4, 0xA086_CFCD_97BF_97F3), // 1e-204
    (0x6122_CD12_8006_B2CD, 0xC8A8_83C0_FDAF_7DF0), // 1e-203
    (0x796B_8057_2008_5F81, 0xFAD2_A4B1_3D1B_5D6C), // 1e-202
    (0xCBE3_3036_7405_3BB0, 0x9CC3_A6EE_C631_1A63), // 1e-201
    (0xBEDB_FC44_1106_8A9C, 0xC3F4_90AA_77BD_60FC), // 1e-200
    (0xEE92_FB55_1548_2D44, 0xF4F1_B4D5_15AC_B93B), // 1e-199
    (0x751B_DD15_2D4D_1C4A, 0x9917_1105_2D8B_F3C5), // 1e-198
    (0xD262_D45A_78A0_635D, 0xBF5C_D546_78EE_F0B6), // 1e-197
    (0x86FB_8971_16C8_7C34, 0xEF34_0A98_172A_ACE4), // 1e-196
    (0xD45D_35E6_AE3D_4DA0, 0x9580_869F_0E7A_AC0E), // 1e-195
    (0x8974_8360_59CC_A109, 0xBAE0_A846_D219_5712), // 1e-194
    (0x2BD1_A438_703F_C94B, 0xE998_D258_869F_ACD7), // 1e-193
    (0x7B63_06A3_4627_DDCF, 0x91FF_8377_5423_CC06), // 1e-192
    (0x1A3B_C84C_17B1_D542, 0xB67F_6455_292C_BF08), // 1e-191
    (0x20CA_BA5F_1D9E_4A93, 0xE41F_3D6A_7377_EECA), // 1e-190
    (0x547E_B47B_7282_EE9C, 0x8E93_8662_882A_F53E), // 1e-189
    (0xE99E_619A_4F23_AA43, 0xB238_67FB_2A35_B28D), // 1e-188
    (0x6405_FA00_E2EC_94D4, 0xDEC6_81F9_F4C3_1F31), // 1e-187
    (0xDE83_BC40_8DD3_DD04, 0x8B3C_113C_38F9_F37E), // 1e-186
    (0x9624_AB50_B148_D445, 0xAE0B_158B_4738_705E), // 1e-185
    (0x3BAD_D624_DD9B_0957, 0xD98D_DAEE_1906_8C76), // 1e-184
    (0xE54C_A5D7_0A80_E5D6, 0x87F8_A8D4_CFA4_17C9), // 1e-183
    (0x5E9F_CF4C_CD21_1F4C, 0xA9F6_D30A_038D_1DBC), // 1e-182
    (0x7647_C320_0069_671F, 0xD474_87CC_8470_652B), // 1e-181
    (0x29EC_D9F4_0041_E073, 0x84C8_D4DF_D2C6_3F3B), // 1e-180
    (0xF468_1071_0052_5890, 0xA5FB_0A17_C777_CF09), // 1e-179
    (0x7182_148D_4066_EEB4, 0xCF79_CC9D_B955_C2CC), // 1e-178
    (0xC6F1_4CD8_4840_5530, 0x81AC_1FE2_93D5_99BF), // 1e-177
    (0xB8AD_A00E_5A50_6A7C, 0xA217_27DB_38CB_002F), // 1e-176
    (0xA6D9_0811_F0E4_851C, 0xCA9C_F1D2_06FD_C03B), // 1e-175
    (0x908F_4A16_6D1D_A663, 0xFD44_2E46_88BD_304A), // 1e-174
    (0x9A59_8E4E_0432_87FE, 0x9E4A_9CEC_1576_3E2E), // 1e-173
    (0x40EF_F1E1_853F_29FD, 0xC5DD_4427_1AD3_CDBA), // 1e-172
    (0xD12B_EE59_E68E_F47C, 0xF754_9530_E188_C128), // 1e-171
    (0x82BB_74F8_3019_58CE, 0x9A94_DD3E_8CF5_78B9), // 1e-170
    (0xE36A_5236_3C1F_AF01, 0xC13A_148E_3032_D6E7), // 1e-169
    (0xDC44_E6C3_CB27_9AC1, 0xF188_99B1_BC3F_8CA1), // 1e-168
    (0x29AB_103A_5EF8_C0B9, 0x96F5_600F_15A7_B7E5), // 1e-167
    (0x7415_D448_F6B6_F0E7, 0xBCB2_B812_DB11_A5DE), // 1e-166
    (0x111B_495B_3464_AD21, 0xEBDF_6617_91D6_0F56), // 1e-165
    (0xCAB1_0DD9_00BE_EC34, 0x936B_9FCE_BB25_C995), // 1e-164
    (0x3D5D_514F_40EE_A742, 0xB846_87C2_69EF_3BFB), // 1e-163
    (0x0CB4_A5A3_112A_5112, 0xE658_29B3_046B_0AFA), // 1e-162
    (0x47F0_E785_EABA_72AB, 0x8FF7_1A0F_E2C2_E6DC), // 1e-161
    (0x59ED_2167_6569_0F56, 0xB3F4_E093_DB73_A093), // 1e-160
    (0x3068_69C1_3EC3_532C, 0xE0F2_18B8_D250_88B8), // 1e-159
    (0x1E41_4218_C73A_13FB, 0x8C97_4F73_8372_5573), // 1e-158
    (0xE5D1_929E_F908_98FA, 0xAFBD_2350_644E_EACF), // 1e-157
    (0xDF45_F746_B74A_BF39, 0xDBAC_6C24_7D62_A583), // 1e-156
    (0x6B8B_BA8C_328E_B783, 0x894B_C396_CE5D_A772), // 1e-155
    (0x066E_A92F_3F32_6564, 0xAB9E_B47C_81F5_114F), // 1e-154
    (0xC80A_537B_0EFE_FEBD, 0xD686_619B_A272_55A2), // 1e-153
    (0xBD06_742C_E95F_5F36, 0x8613_FD01_4587_7585), // 1e-152
    (0x2C48_1138_23B7_3704, 0xA798_FC41_96E9_52E7), // 1e-151
    (0xF75A_1586_2CA5_04C5, 0xD17F_3B51_FCA3_A7A0), // 1e-150
    (0x9A98_4D73_DBE7_22FB, 0x82EF_8513_3DE6_48C4), // 1e-149
    (0xC13E_60D0_D2E0_EBBA, 0xA3AB_6658_0D5F_DAF5), // 1e-148
    (0x318D_F905_0799_26A8, 0xCC96_3FEE_10B7_D1B3), // 1e-147
    (0xFDF1_7746_497F_7052, 0xFFBB_CFE9_94E5_C61F), // 1e-146
    (0xFEB6_EA8B_EDEF_A633, 0x9FD5_61F1_FD0F_9BD3), // 1e-145
    (0xFE64_A52E_E96B_8FC0, 0xC7CA_BA6E_7C53_82C8), // 1e-144
    (0x3DFD_CE7A_A3C6_73B0, 0xF9BD_690A_1B68_637B), // 1e-143
    (0x06BE_A10C_A65C_084E, 0x9C16_61A6_5121_3E2D), // 1e-142
    (0x486E_494F_CFF3_0A62, 0xC31B_FA0F_E569_8DB8), // 1e-141
    (0x5A89_DBA3_C3EF_CCFA, 0xF3E2_F893_DEC3_F126), // 1e-140
    (0xF896_2946_5A75_E01C, 0x986D_DB5C_6B3A_76B7), // 1e-139
    (0xF6BB_B397_F113_5823, 0xBE89_5233_8609_1465), // 1e-138
    (0x746A_A07D_ED58_2E2C, 0xEE2B_A6C0_678B_597F), // 1e-137
    (0xA8C2_A44E_B457_1CDC, 0x94DB_4838_40B7_17EF), // 1e-136
    (0x92F3_4D62_616C_E413, 0xBA12_1A46_50E4_DDEB), // 1e-135
    (0x77B0_20BA_F9C8_1D17, 0xE896_A0D7_E51E_1566), // 1e-134
    (0x0ACE_1474_DC1D_122E, 0x915E_2486_EF32_CD60), // 1e-133
    (0x0D81_9992_1324_56BA, 0xB5B5_ADA8_AAFF_80B8), // 1e-132
    (0x10E1_FFF6_97ED_6C69, 0xE323_1912_D5BF_60E6), // 1e-131
    (0xCA8D_3FFA_1EF4_63C1, 0x8DF5_EFAB_C597_9C8F), // 1e-130
    (0xBD30_8FF8_A6B1_7CB2, 0xB173_6B96_B6FD_83B3), // 1e-129
    (0xAC7C_B3F6_D05D_DBDE, 0xDDD0_467C_64BC_E4A0), // 1e-128
    (0x6BCD_F07A_423A_A96B, 0x8AA2_2C0D_BEF6_0EE4), // 1e-127
    (0x86C1_6C98_D2C9_53C6, 0xAD4A_B711_2EB3_929D), // 1e-126
    (0xE871_C7BF_077B_A8B7, 0xD89D_64D5_7A60_7744), // 1e-125
    (0x1147_1CD7_64AD_4972, 0x8762_5F05_6C7C_4A8B), // 1e-124
    (0xD598_E40D_3DD8_9BCF, 0xA93A_F6C6_C79B_5D2D), // 1e-123
    (0x4AFF_1D10_8D4E_C2C3, 0xD389_B478_7982_3479), // 1e-122
    (0xCEDF_722A_5851_39BA, 0x8436_10CB_4BF1_60CB), // 1e-121
    (0xC297_4EB4_EE65_8828, 0xA543_94FE_1EED_B8FE), // 1e-120
    (0x733D_2262_29FE_EA32, 0xCE94_7A3D_A6A9_273E), // 1e-119
    (0x0806_357D_5A3F_525F, 0x811C_CC66_8829_B887), // 1e-118
    (0xCA07_C2DC_B0CF_26F7, 0xA163_FF80_2A34_26A8), // 1e-117
    (0xFC89_B393_DD02_F0B5, 0xC9BC_FF60_34C1_3052), // 1e-116
    (0xBBAC_2078_D443_ACE2, 0xFC2C_3F38_41F1_7C67), // 1e-115
    (0xD54B_944B_84AA_4C0D, 0x9D9B_A783_2936_EDC0), // 1e-114
    (0x0A9E_795E_65D4_DF11, 0xC502_9163_F384_A931), // 1e-113
    (0x4D46_17B5_FF4A_16D5, 0xF643_35BC_F065_D37D), // 1e-112
    (0x504B_CED1_BF8E_4E45, 0x99EA_0196_163F_A42E), // 1e-111
    (0xE45E_C286_2F71_E1D6, 0xC064_81FB_9BCF_8D39), // 1e-110
    (0x5D76_7327_BB4E_5A4C, 0xF07D_A27A_82C3_7088), // 1e-109
    (0x3A6A_07F8_D510_F86F, 0x964E_858C_91BA_2655), // 1e-108
    (0x8904_89F7_0A55_368B, 0xBBE2_26EF_B628_AFEA), // 1e-107
    (0x2B45_AC74_CCEA_842E, 0xEADA_B0AB_A3B2_DBE5), // 1e-106
    (0x3B0B_8BC9_0012_929D, 0x92C8_AE6B_464F_C96F), // 1e-105
    (0x09CE_6EBB_4017_3744, 0xB77A_DA06_17E3_BBCB), // 1e-104
    (0xCC42_0A6A_101D_0515, 0xE559_9087_9DDC_AABD), // 1e-103
    (0x9FA9_4682_4A12_232D, 0x8F57_FA54_C2A9_EAB6), // 1e-102
    (0x4793_9822_DC96_ABF9, 0xB32D_F8E9_F354_6564), // 1e-101
    (0x5978_7E2B_93BC_56F7, 0xDFF9_7724_7029_7EBD), // 1e-100
    (0x57EB_4EDB_3C55_B65A, 0x8BFB_EA76_C619_EF36), // 1e-99
    (0xEDE6_2292_0B6B_23F1, 0xAEFA_E514_77A0_6B03), // 1e-98
    (0xE95F_AB36_8E45_ECED, 0xDAB9_9E59_9588_85C4), // 1e-97
    (0x11DB_CB02_18EB_B414, 0x88B4_02F7_FD75_539B), // 1e-96
    (0xD652_BDC2_9F26_A119, 0xAAE1_03B5_FCD2_A881), // 1e-95
    (0x4BE7_6D33_46F0_495F, 0xD599_44A3_7C07_52A2), // 1e-94
    (0x6F70_A440_0C56_2DDB, 0x857F_CAE6_2D84_93A5), // 1e-93
    (0xCB4C_CD50_0F6B_B952, 0xA6DF_BD9F_B8E5_B88E), // 1e-92
    (0x7E20_00A4_1346_A7A7, 0xD097_AD07_A71F_26B2), // 1e-91
    (0x8ED4_0066_8C0C_28C8, 0x825E_CC24_C873_782F), // 1e-90
    (0x7289_0080_2F0F_32FA, 0xA2F6_7F2D_FA90_563B), // 1e-89
    (0x4F2B_40A0_3AD2_FFB9, 0xCBB4_1EF9_7934_6BCA), // 1e-88
    (0xE2F6_10C8_4987_BFA8, 0xFEA1_26B7_D781_86BC), // 1e-87
    (0x0DD9_CA7D_2DF4_D7C9, 0x9F24_B832_E6B0_F436), // 1e-86
    (0x9150_3D1C_7972_0DBB, 0xC6ED_E63F_A05D_3143), // 1e-85
    (0x75A4_4C63_97CE_912A, 0xF8A9_5FCF_8874_7D94), // 1e-84
    (0xC986_AFBE_3EE1_1ABA, 0x9B69_DBE1_B548_CE7C), // 1e-83
    (0xFBE8_5BAD_CE99_6168, 0xC244_52DA_229B_021B), // 1e-82
    (0xFAE2_7299_423F_B9C3, 0xF2D5_6790_AB41_C2A2), // 1e-81
    (0xDCCD_879F_C967_D41A, 0x97C5_60BA_6B09_19A5), // 1e-80
    (0x5400_E987_BBC1_C920, 0xBDB6_B8E9_05CB_600F), // 1e-79
    (0x2901_23E9_AAB2_3B68, 0xED24_6723_473E_3813), // 1e-78
    (0xF9A0_B672_0AAF_6521, 0x9436_C076_0C86_E30B), // 1e-77
    (0xF808_E40E_8D5B_3E69, 0xB944_7093_8FA8_9BCE), // 1e-76
    (0xB60B_1D12_30B2_0E04, 0xE795_8CB8_7392_C2C2), // 1e-75
    (0xB1C6_F22B_5E6F_48C2, 0x90BD_77F3_483B_B9B9), // 1e-74
    (0x1E38_AEB6_360B_1AF3, 0xB4EC_D5F0_1A4A_A828), // 1e-73
    (0x25C6_DA63_C38D_E1B0, 0xE228_0B6C_20DD_5232), // 1e-72
    (0x579C_487E_5A38_AD0E, 0x8D59_0723_948A_535F), // 1e-71
    (0x2D83_5A9D_F0C6_D851, 0xB0AF_48EC_79AC_E837), // 1e-70
    (0xF8E4_3145_6CF8_8E65, 0xDCDB_1B27_9818_2244), // 1e-69
    (0x1B8E_9ECB_641B_58FF, 0x8A08_F0F8_BF0F_156B), // 1e-68
    (0xE272_467E_3D22_2F3F, 0xAC8B_2D36_EED2_DAC5), // 1e-67
    (0x5B0E_D81D_CC6A_BB0F, 0xD7AD_F884_AA87_9177), // 1e-66
    (0x98E9_4712_9FC2_B4E9, 0x86CC_BB52_EA94_BAEA), // 1e-65
    (0x3F23_98D7_47B3_6224, 0xA87F_EA27_A539_E9A5), // 1e-64
    (0x8EEC_7F0D_19A0_3AAD, 0xD29F_E4B1_8E88_640E), // 1e-63
    (0x1953_CF68_3004_24AC, 0x83A3_EEEE_F915_3E89), // 1e-62
    (0x5FA8_C342_3C05_2DD7, 0xA48C_EAAA_B75A_8E2B), // 1e-61
    (0x3792_F412_CB06_794D, 0xCDB0_2555_6531_31B6), // 1e-60
    (0xE2BB_D88B_BEE4_0BD0, 0x808E_1755_5F3E_BF11), // 1e-59
    (0x5B6A_CEAE_AE9D_0EC4, 0xA0B1_9D2A_B70E_6ED6), // 1e-58
    (0xF245_825A_5A44_5275, 0xC8DE_0475_64D2_0A8B), // 1e-57
    (0xEED6_E2F0_F0D5_6712, 0xFB15_8592_BE06_8D2E), // 1e-56
    (0x5546_4DD6_9685_606B, 0x9CED_737B_B6C4_183D), // 1e-55
    (0xAA97_E14C_3C26_B886, 0xC428_D05A_A475_1E4C), // 1e-54
    (0xD53D_D99F_4B30_66A8, 0xF533_0471_4D92_65DF), // 1e-53
    (0xE546_A803_8EFE_4029, 0x993F_E2C6_D07B_7FAB), // 1e-52
    (0xDE98_5204_72BD_D033, 0xBF8F_DB78_849A_5F96), // 1e-51
    (0x963E_6685_8F6D_4440, 0xEF73_D256_A5C0_F77C), // 1e-50
    (0xDDE7_0013_79A4_4AA8, 0x95A8_6376_2798_9AAD), // 1e-49
    (0x5560_C018_580D_5D52, 0xBB12_7C53_B17E_C159), // 1e-48
    (0xAAB8_F01E_6E10_B4A6, 0xE9D7_1B68_9DDE_71AF), // 1e-47
    (0xCAB3_9613_04CA_70E8, 0x9226_7121_62AB_070D), // 1e-46
    (0x3D60_7B97_C5FD_0D22, 0xB6B0_0D69_BB55_C8D1), // 1e-45
    (0x8CB8_9A7D_B77C_506A, 0xE45C_10C4_2A2B_3B05), // 1e-44
    (0x77F3_608E_92AD_B242, 0x8EB9_8A7A_9A5B_04E3), // 1e-43
    (0x55F0_38B2_3759_1ED3, 0xB267_ED19_40F1_C61C), // 1e-42
    (0x6B6C_46DE_C52F_6688, 0xDF01_E85F_912E_37A3), // 1e-41
    (0x2323_AC4B_3B3D_A015, 0x8B61_313B_BABC_E2C6), // 1e-40
    (0xABEC_975E_0A0D_081A, 0xAE39_7D8A_A96C_1B77), // 1e-39
    (0x96E7_BD35_8C90_4A21, 0xD9C7_DCED_53C7_2255), // 1e-38
    (0x7E50_D641_77DA_2E54, 0x881C_EA14_545C_7575), // 1e-37
    (0xDDE5_0BD1_D5D0_B9E9, 0xAA24_2499_6973_92D2), // 1e-36
    (0x955E_4EC6_4B44_E864, 0xD4AD_2DBF_C3D0_7787), // 1e-35
    (0xBD5A_F13B_EF0B_113E, 0x84EC_3C97_DA62_4AB4), // 1e-34
    (0xECB1_AD8A_EACD_D58E, 0xA627_4BBD_D0FA_DD61), // 1e-33
    (0x67DE_18ED_A581_4AF2, 0xCFB1_1EAD_4539_94BA), // 1e-32
    (0x80EA_CF94_8770_CED7, 0x81CE_B32C_4B43_FCF4), // 1e-31
    (0xA125_8379_A94D_028D, 0xA242_5FF7_5E14_FC31), // 1e-30
    (0x096E_E458_13A0_4330, 0xCAD2_F7F5_359A_3B3E), // 1e-29
    (0x8BCA_9D6E_1888_53FC, 0xFD87_B5F2_8300_CA0D), // 1e-28
    (0x775E_A264_CF55_347D, 0x9E74_D1B7_91E0_7E48), // 1e-27
    (0x9536_4AFE_032A_819D, 0xC612_0625_7658_9DDA), // 1e-26
    (0x3A83_DDBD_83F5_2204, 0xF796_87AE_D3EE_C551), // 1e-25
    (0xC492_6A96_7279_3542, 0x9ABE_14CD_4475_3B52), // 1e-24
    (0x75B7_053C_0F17_8293, 0xC16D_9A00_9592_8A27), // 1e-23
    (0x5324_C68B_12DD_6338, 0xF1C9_0080_BAF7_2CB1), // 1e-22
    (0xD3F6_FC16_EBCA_5E03, 0x971D_A050_74DA_7BEE), // 1e-21
    (0x88F4_BB1C_A6BC_F584, 0xBCE5_0864_9211_1AEA), // 1e-20
    (0x2B31_E9E3_D06C_32E5, 0xEC1E_4A7D_B695_61A5), // 1e-19
    (0x3AFF_322E_6243_9FCF, 0x9392_EE8E_921D_5D07), // 1e-18
    (0x09BE_FEB9_FAD4_87C2, 0xB877_AA32_36A4_B449), // 1e-17
    (0x4C2E_BE68_7989_A9B3, 0xE695_94BE_C44D_E15B), // 1e-16
    (0x0F9D_3701_4BF6_0A10, 0x901D_7CF7_3AB0_ACD9), // 1e-15
    (0x5384_84C1_9EF3_8C94, 0xB424_DC35_095C_D80F), // 1e-14
    (0x2865_A5F2_06B0_6FB9, 0xE12E_1342_4BB4_0E13), // 1e-13
    (0xF93F_87B7_442E_45D3, 0x8CBC_CC09_6F50_88CB), // 1e-12
    (0xF78F_69A5_1539_D748, 0xAFEB_FF0B_CB24_AAFE), // 1e-11
    (0xB573_440E_5A88_4D1B, 0xDBE6_FECE_BDED_D5BE), // 1e-10
    (0x3168_0A88_F895_3030, 0x8970_5F41_36B4_A597), // 1e-9
    (0xFDC2_0D2B_36BA_7C3D, 0xABCC_7711_8461_CEFC), // 1e-8
    (0x3D32_9076_0469_1B4C, 0xD6BF_94D5_E57A_42BC), // 1e-7
    (0xA63F_9A49_C2C1_B10F, 0x8637_BD05_AF6C_69B5), // 1e-6
    (0x0FCF_80DC_3372_1D53, 0xA7C5_AC47_1B47_8423), // 1e-5
    (0xD3C3_6113_404E_A4A8, 0xD1B7_1758_E219_652B), // 1e-4
    (0x645A_1CAC_0831_26E9, 0x8312_6E97_8D4F_DF3B), // 1e-3
    (0x3D70_A3D7_0A3D_70A3, 0xA3D7_0A3D_70A3_D70A), // 1e-2
    (0xCCCC_CCCC_CCCC_CCCC, 0xCCCC_CCCC_CCCC_CCCC), // 1e-1
    (0x0000_0000_0000_0000, 0x8000_0000_0000_0000), // 1e0
    (0x0000_0000_0000_0000, 0xA000_0000_0000_0000), // 1e1
    (0x0000_0000_0000_0000, 0xC800_0000_0000_0000), // 1e2
    (0x0000_0000_0000_0000, 0xFA00_0000_0000_0000), // 1e3
    (0x0000_0000_0000_0000, 0x9C40_0000_0000_0000), // 1e4
    (0x0000_0000_0000_0000, 0xC350_0000_0000_0000), // 1e5
    (0x0000_0000_0000_0000, 0xF424_0000_0000_0000), // 1e6
    (0x0000_0000_0000_0000, 0x9896_8000_0000_0000), // 1e7
    (0x0000_0000_0000_0000, 0xBEBC_2000_0000_0000), // 1e8
    (0x0000_0000_0000_0000, 0xEE6B_2800_0000_0000), // 1e9
    (0x0000_0000_0000_0000, 0x9502_F900_0000_0000), // 1e10
    (0x0000_0000_0000_0000, 0xBA43_B740_0000_0000), // 1e11
    (0x0000_0000_0000_0000, 0xE8D4_A510_0000_0000), // 1e12
    (0x0000_0000_0000_0000, 0x9184_E72A_0000_0000), // 1e13
    (0x0000_0000_0000_0000, 0xB5E6_20F4_8000_0000), // 1e14
    (0x0000_0000_0000_0000, 0xE35F_A931_A000_0000), // 1e15
    (0x0000_0000_0000_0000, 0x8E1B_C9BF_0400_0000), // 1e16
    (0x0000_0000_0000_0000, 0xB1A2_BC2E_C500_0000), // 1e17
    (0x0000_0000_0000_0000, 0xDE0B_6B3A_7640_0000), // 1e18
    (0x0000_0000_0000_0000, 0x8AC7_2304_89E8_0000), // 1e19
    (0x0000_0000_0000_0000, 0xAD78_EBC5_AC62_0000), // 1e20
    (0x0000_0000_0000_0000, 0xD8D7_26B7_177A_8000), // 1e21
    (0x0000_0000_0000_0000, 0x8786_7832_6EAC_9000), // 1e22
    (0x0000_0000_0000_0000, 0xA968_163F_0A57_B400), // 1e23
    (0x0000_0000_0000_0000, 0xD3C2_1BCE_CCED_A100), // 1e24
    (0x0000_0000_0000_0000, 0x8459_5161_4014_84A0), // 1e25
    (0x0000_0000_0000_0000, 0xA56F_A5B9_9019_A5C8), // 1e26
    (0x0000_0000_0000_0000, 0xCECB_8F27_F420_0F3A), // 1e27
    (0x4000_0000_0000_0000, 0x813F_3978_F894_0984), // 1e28
    (0x5000_0000_0000_0000, 0xA18F_07D7_36B9_0BE5), // 1e29
    (0xA400_0000_0000_0000, 0xC9F2_C9CD_0467_4EDE), // 1e30
    (0x4D00_0000_0000_0000, 0xFC6F_7C40_4581_2296), // 1e31
    (0xF020_0000_0000_0000, 0x9DC5_ADA8_2B70_B59D), // 1e32
    (0x6C28_0000_0000_0000, 0xC537_1912_364C_E305), // 1e33
    (0xC732_0000_0000_0000, 0xF684_DF56_C3E0_1BC6), // 1e34
    (0x3C7F_4000_0000_0000, 0x9A13_0B96_3A6C_115C), // 1e35
    (0x4B9F_1000_0000_0000, 0xC097_CE7B_C907_15B3), // 1e36
    (0x1E86_D400_0000_0000, 0xF0BD_C21A_BB48_DB20), // 1e37
    (0x1314_4480_0000_0000, 0x9676_9950_B50D_88F4), // 1e38
    (0x17D9_55A0_0000_0000, 0xBC14_3FA4_E250_EB31), // 1e39
    (0x5DCF_AB08_0000_0000, 0xEB19_4F8E_1AE5_25FD), // 1e40
    (0x5AA1_CAE5_0000_0000, 0x92EF_D1B8_D0CF_37BE), // 1e41
    (0xF14A_3D9E_4000_0000, 0xB7AB_C627_0503_05AD), // 1e42
    (0x6D9C_CD05_D000_0000, 0xE596_B7B0_C643_C719), // 1e43
    (0xE482_0023_A200_0000, 0x8F7E_32CE_7BEA_5C6F), // 1e44
    (0xDDA2_802C_8A80_0000, 0xB35D_BF82_1AE4_F38B), // 1e45
    (0xD50B_2037_AD20_0000, 0xE035_2F62_A19E_306E), // 1e46
    (0x4526_F422_CC34_0000, 0x8C21_3D9D_A502_DE45), // 1e47
    (0x9670_B12B_7F41_0000, 0xAF29_8D05_0E43_95D6), // 1e48
    (0x3C0C_DD76_5F11_4000, 0xDAF3_F046_51D4_7B4C), // 1e49
    (0xA588_0A69_FB6A_C800, 0x88D8_762B_F324_CD0F), // 1e50
    (0x8EEA_0D04_7A45_7A00, 0xAB0E_93B6_EFEE_0053), // 1e51
    (0x72A4_9045_98D6_D880, 0xD5D2_38A4_ABE9_8068), // 1e52
    (0x47A6_DA2B_7F86_4750, 0x85A3_6366_EB71_F041), // 1e53
    (0x9990_90B6_5F67_D924, 0xA70C_3C40_A64E_6C51), // 1e54
    (0xFFF4_B4E3_F741_CF6D, 0xD0CF_4B50_CFE2_0765), // 1e55
    (0xBFF8_F10E_7A89_21A4, 0x8281_8F12_81ED_449F), // 1e56
    (0xAFF7_2D52_192B_6A0D, 0xA321_F2D7_2268_95C7), // 1e57
    (0x9BF4_F8A6_9F76_4490, 0xCBEA_6F8C_EB02_BB39), // 1e58
    (0x02F2_36D0_4753_D5B4, 0xFEE5_0B70_25C3_6A08), // 1e59
    (0x01D7_6242_2C94_6590, 0x9F4F_2726_179A_2245), // 1e60
    (0x424D_3AD2_B7B9_7EF5, 0xC722_F0EF_9D80_AAD6), // 1e61
    (0xD2E0_8987_65A7_DEB2, 0xF8EB_AD2B_84E0_D58B), // 1e62
    (0x63CC_55F4_9F88_EB2F, 0x9B93_4C3B_330C_8577), // 1e63
    (0x3CBF_6B71_C76B_25FB, 0xC278_1F49_FFCF_A6D5), // 1e64
    (0x8BEF_464E_3945_EF7A, 0xF316_271C_7FC3_908A), // 1e65
    (0x9775_8BF0_E3CB_B5AC, 0x97ED_D871_CFDA_3A56), // 1e66
    (0x3D52_EEED_1CBE_A317, 0xBDE9_4E8E_43D0_C8EC), // 1e67
    (0x4CA7_AAA8_63EE_4BDD, 0xED63_A231_D4C4_FB27), // 1e68
    (0x8FE8_CAA9_3E74_EF6A, 0x945E_455F_24FB_1CF8), // 1e69
    (0xB3E2_FD53_8E12_2B44, 0xB975_D6B6_EE39_E436), // 1e70
    (0x60DB_BCA8_7196_B616, 0xE7D3_4C64_A9C8_5D44), // 1e71
    (0xBC89_55E9_46FE_31CD, 0x90E4_0FBE_EA1D_3A4A), // 1e72
    (0x6BAB_AB63_98BD_BE41, 0xB51D_13AE_A4A4_88DD), // 1e73
    (0xC696_963C_7EED_2DD1, 0xE264_589A_4DCD_AB14), // 1e74
    (0xFC1E_1DE5_CF54_3CA2, 0x8D7E_B760_70A0_8AEC), // 1e75
    (0x3B25_A55F_4329_4BCB, 0xB0DE_6538_8CC8_ADA8), // 1e76
    (0x49EF_0EB7_13F3_9EBE, 0xDD15_FE86_AFFA_D912), // 1e77
    (0x6E35_6932_6C78_4337, 0x8A2D_BF14_2DFC_C7AB), // 1e78
    (0x49C2_C37F_0796_5404, 0xACB9_2ED9_397B_F996), // 1e79
    (0xDC33_745E_C97B_E906, 0xD7E7_7A8F_87DA_F7FB), // 1e80
    (0x69A0_28BB_3DED_71A3, 0x86F0_AC99_B4E8_DAFD), // 1e81
    (0xC408_32EA_0D68_CE0C, 0xA8AC_D7C0_2223_11BC), // 1e82
    (0xF50A_3FA4_90C3_0190, 0xD2D8_0DB0_2AAB_D62B), // 1e83
    (0x7926_67C6_DA79_E0FA, 0x83C7_088E_1AAB_65DB), // 1e84
    (0x5770_01B8_9118_5938, 0xA4B8_CAB1_A156_3F52), // 1e85
    (0xED4C_0226_B55E_6F86, 0xCDE6_FD5E_09AB_CF26), // 1e86
    (0x544F_8158_315B_05B4, 0x80B0_5E5A_C60B_6178), // 1e87
    (0x6963_61AE_3DB1_C721, 0xA0DC_75F1_778E_39D6), // 1e88
    (0x03BC_3A19_CD1E_38E9, 0xC913_936D_D571_C84C), // 1e89
    (0x04AB_48A0_4065_C723, 0xFB58_7849_4ACE_3A5F), // 1e90
    (0x62EB_0D64_283F_9C76, 0x9D17_4B2D_CEC0_E47B), // 1e91
    (0x3BA5_D0BD_324F_8394, 0xC45D_1DF9_4271_1D9A), // 1e92
    (0xCA8F_44EC_7EE3_6479, 0xF574_6577_930D_6500), // 1e93
    (0x7E99_8B13_CF4E_1ECB, 0x9968_BF6A_BBE8_5F20), // 1e94
    (0x9E3F_EDD8_C321_A67E, 0xBFC2_EF45_6AE2_76E8), // 1e95
    (0xC5CF_E94E_F3EA_101E, 0xEFB3_AB16_C59B_14A2), // 1e96
    (0xBBA1_F1D1_5872_4A12, 0x95D0_4AEE_3B80_ECE5), // 1e97
    (0x2A8A_6E45_AE8E_DC97, 0xBB44_5DA9_CA61_281F), // 1e98
    (0xF52D_09D7_1A32_93BD, 0xEA15_7514_3CF9_7226), // 1e99
    (0x593C_2626_705F_9C56, 0x924D_692C_A61B_E758), // 1e100
    (0x6F8B_2FB0_0C77_836C, 0xB6E0_C377_CFA2_E12E), // 1e101
    (0x0B6D_FB9C_0F95_6447, 0xE498_F455_C38B_997A), // 1e102
    (0x4724_BD41_89BD_5EAC, 0x8EDF_98B5_9A37_3FEC), // 1e103
    (0x58ED_EC91_EC2C_B657, 0xB297_7EE3_00C5_0FE7), // 1e104
    (0x2F29_67B6_6737_E3ED, 0xDF3D_5E9B_C0F6_53E1), // 1e105
    (0xBD79_E0D2_0082_EE74, 0x8B86_5B21_5899_F46C), // 1e106
    (0xECD8_5906_80A3_AA11, 0xAE67_F1E9_AEC0_7187), // 1e107
    (0xE80E_6F48_20CC_9495, 0xDA01_EE64_1A70_8DE9), // 1e108
    (0x3109_058D_147F_DCDD, 0x8841_34FE_9086_58B2), // 1e109
    (0xBD4B_46F0_599F_D415, 0xAA51_823E_34A7_EEDE), // 1e110
    (0x6C9E_18AC_7007_C91A, 0xD4E5_E2CD_C1D1_EA96), // 1e111
    (0x03E2_CF6B_C604_DDB0, 0x850F_ADC0_9923_329E), // 1e112
    (0x84DB_8346_B786_151C, 0xA653_9930_BF6B_FF45), // 1e113
    (0xE612_6418_6567_9A63, 0xCFE8_7F7C_EF46_FF16), // 1e114
    (0x4FCB_7E8F_3F60_C07E, 0x81F1_4FAE_158C_5F6E), // 1e115
    (0xE3BE_5E33_0F38_F09D, 0xA26D_A399_9AEF_7749), // 1e116
    (0x5CAD_F5BF_D307_2CC5, 0xCB09_0C80_01AB_551C), // 1e117
    (0x73D9_732F_C7C8_F7F6, 0xFDCB_4FA0_0216_2A63), // 1e118
    (0x2867_E7FD_DCDD_9AFA, 0x9E9F_11C4_014D_DA7E), // 1e119
    (0xB281_E1FD_5415_01B8, 0xC646_D635_01A1_511D), // 1e120
    (0x1F22_5A7C_A91A_4226, 0xF7D8_8BC2_4209_A565), // 1e121
    (0x3375_788D_E9B0_6958, 0x9AE7_5759_6946_075F), // 1e122
    (0x0052_D6B1_641C_83AE, 0xC1A1_2D2F_C397_8937), // 1e123
    (0xC067_8C5D_BD23_A49A, 0xF209_787B_B47D_6B84), // 1e124
    (0xF840_B7BA_9636_46E0, 0x9745_EB4D_50CE_6332), // 1e125
    (0xB650_E5A9_3BC3_D898, 0xBD17_6620_A501_FBFF), // 1e126
    (0xA3E5_1F13_8AB4_CEBE, 0xEC5D_3FA8_CE42_7AFF), // 1e127
    (0xC66F_336C_36B1_0137, 0x93BA_47C9_80E9_8CDF), // 1e128
    (0xB80B_0047_445D_4184, 0xB8A8_D9BB_E123_F017), // 1e129
    (0xA60D_C059_1574_91E5, 0xE6D3_102A_D96C_EC1D), // 1e130
    (0x87C8_9837_AD68_DB2F, 0x9043_EA1A_C7E4_1392), // 1e131
    (0x29BA_BE45_98C3_11FB, 0xB454_E4A1_79DD_1877), // 1e132
    (0xF429_6DD6_FEF3_D67A, 0xE16A_1DC9_D854_5E94), // 1e133
    (0x1899_E4A6_5F58_660C, 0x8CE2_529E_2734_BB1D), // 1e134
    (0x5EC0_5DCF_F72E_7F8F, 0xB01A_E745_B101_E9E4), // 1e135
    (0x7670_7543_F4FA_1F73, 0xDC21_A117_1D42_645D), // 1e136
    (0x6A06_494A_791C_53A8, 0x8995_04AE_7249_7EBA), // 1e137
    (0x0487_DB9D_1763_6892, 0xABFA_45DA_0EDB_DE69), // 1e138
    (0x45A9_D284_5D3C_42B6, 0xD6F8_D750_9292_D603), // 1e139
    (0x0B8A_2392_BA45_A9B2, 0x865B_8692_5B9B_C5C2), // 1e140
    (0x8E6C_AC77_68D7_141E, 0xA7F2_6836_F282_B732), // 1e141
    (0x3207_D795_430C_D926, 0xD1EF_0244_AF23_64FF), // 1e142
    (0x7F44_E6BD_49E8_07B8, 0x8335_616A_ED76_1F1F), // 1e143
    (0x5F16_206C_9C62_09A6, 0xA402_B9C5_A8D3_A6E7), // 1e144
    (0x36DB_A887_C37A_8C0F, 0xCD03_6837_1308_90A1), // 1e145
    (0xC249_4954_DA2C_9789, 0x8022_2122_6BE5_5A64), // 1e146
    (0xF2DB_9BAA_10B7_BD6C, 0xA02A_A96B_06DE_B0FD), // 1e147
    (0x6F92_8294_94E5_ACC7, 0xC835_53C5_C896_5D3D), // 1e148
    (0xCB77_2339_BA1F_17F9, 0xFA42_A8B7_3ABB_F48C), // 1e149
    (0xFF2A_7604_1453_6EFB, 0x9C69_A972_84B5_78D7), // 1e150
    (0xFEF5_1385_1968_4ABA, 0xC384_13CF_25E2_D70D), // 1e151
    (0x7EB2_5866_5FC2_5D69, 0xF465_18C2_EF5B_8CD1), // 1e152
    (0xEF2F_773F_FBD9_7A61, 0x98BF_2F79_D599_3802), // 1e153
    (0xAAFB_550F_FACF_D8FA, 0xBEEE_FB58_4AFF_8603), // 1e154
    (0x95BA_2A53_F983_CF38, 0xEEAA_BA2E_5DBF_6784), // 1e155
    (0xDD94_5A74_7BF2_6183, 0x952A_B45C_FA97_A0B2), // 1e156
    (0x94F9_7111_9AEE_F9E4, 0xBA75_6174_393D_88DF), // 1e157
    (0x7A37_CD56_01AA_B85D, 0xE912_B9D1_478C_EB17), // 1e158
    (0xAC62_E055_C10A_B33A, 0x91AB_B422_CCB8_12EE), // 1e159
    (0x577B_986B_314D_6009, 0xB616_A12B_7FE6_17AA), // 1e160
    (0xED5A_7E85_FDA0_B80B, 0xE39C_4976_5FDF_9D94), // 1e161
    (0x1458_8F13_BE84_7307, 0x8E41_ADE9_FBEB_C27D), // 1e162
    (0x596E_B2D8_AE25_8FC8, 0xB1D2_1964_7AE6_B31C), // 1e163
    (0x6FCA_5F8E_D9AE_F3BB, 0xDE46_9FBD_99A0_5FE3), // 1e164
    (0x25DE_7BB9_480D_5854, 0x8AEC_23D6_8004_3BEE), // 1e165
    (0xAF56_1AA7_9A10_AE6A, 0xADA7_2CCC_2005_4AE9), // 1e166
    (0x1B2B_A151_8094_DA04, 0xD910_F7FF_2806_9DA4), // 1e167
    (0x90FB_44D2_F05D_0842, 0x87AA_9AFF_7904_2286), // 1e168
    (0x353A_1607_AC74_4A53, 0xA995_41BF_5745_2B28), // 1e169
    (0x4288_9B89_9791_5CE8, 0xD3FA_922F_2D16_75F2), // 1e170
    (0x6995_6135_FEBA_DA11, 0x847C_9B5D_7C2E_09B7), // 1e171
    (0x43FA_B983_7E69_9095, 0xA59B_C234_DB39_8C25), // 1e172
    (0x94F9_67E4_5E03_F4BB, 0xCF02_B2C2_1207_EF2E), // 1e173
    (0x1D1B_E0EE_BAC2_78F5, 0x8161_AFB9_4B44_F57D), // 1e174
    (0x6462_D92A_6973_1732, 0xA1BA_1BA7_9E16_32DC), // 1e175
    (0x7D7B_8F75_03CF_DCFE, 0xCA28_A291_859B_BF93), // 1e176
    (0x5CDA_7352_44C3_D43E, 0xFCB2_CB35_E702_AF78), // 1e177
    (0x3A08_8813_6AFA_64A7, 0x9DEF_BF01_B061_ADAB), // 1e178
    (0x088A_AA18_45B8_FDD0, 0xC56B_AEC2_1C7A_1916), // 1e179
    (0x8AAD_549E_5727_3D45, 0xF6C6_9A72_A398_9F5B), // 1e180
    (0x36AC_54E2_F678_864B, 0x9A3C_2087_A63F_6399), // 1e181
    (0x8457_6A1B_B416_A7DD, 0xC0CB_28A9_8FCF_3C7F), // 1e182
    (0x656D_44A2_A11C_51D5, 0xF0FD_F2D3_F3C3_0B9F), // 1e183
    (0x9F64_4AE5_A4B1_B325, 0x969E_B7C4_7859_E743), // 1e184
    (0x873D_5D9F_0DDE_1FEE, 0xBC46_65B5_9670_6114), // 1e185
    (0xA90C_B506_D155_A7EA, 0xEB57_FF22_FC0C_7959), // 1e186
    (0x09A7_F124_42D5_88F2, 0x9316_FF75_DD87_CBD8), // 1e187
    (0x0C11_ED6D_538A_EB2F, 0xB7DC_BF53_54E9_BECE), // 1e188
    (0x8F16_68C8_A86D_A5FA, 0xE5D3_EF28_2A24_2E81), // 1e189
    (0xF96E_017D_6944_87BC, 0x8FA4_7579_1A56_9D10), // 1e190
    (0x37C9_81DC_C395_A9AC, 0xB38D_92D7_60EC_4455), // 1e191
    (0x85BB_E253_F47B_1417, 0xE070_F78D_3927_556A), // 1e192
    (0x9395_6D74_78CC_EC8E, 0x8C46_9AB8_43B8_9562), // 1e193
    (0x387A_C8D1_9700_27B2, 0xAF58_4166_54A6_BABB), // 1e194
    (0x0699_7B05_FCC0_319E, 0xDB2E_51BF_E9D0_696A), // 1e195
    (0x441F_ECE3_BDF8_1F03, 0x88FC_F317_F222_41E2), // 1e196
    (0xD527_E81C_AD76_26C3, 0xAB3C_2FDD_EEAA_D25A), // 1e197
    (0x8A71_E223_D8D3_B074, 0xD60B_3BD5_6A55_86F1), // 1e198
    (0xF687_2D56_6784_4E49, 0x85C7_0565_6275_7456), // 1e199
    (0xB428_F8AC_0165_61DB, 0xA738_C6BE_BB12_D16C), // 1e200
    (0xE133_36D7_01BE_BA52, 0xD106_F86E_69D7_85C7), // 1e201
    (0xECC0_0246_6117_3473, 0x82A4_5B45_0226_B39C), // 1e202
    (0x27F0_02D7_F95D_0190, 0xA34D_7216_42B0_6084), // 1e203
    (0x31EC_038D_F7B4_41F4, 0xCC20_CE9B_D35C_78A5), // 1e204
    (0x7E67_0471_75A1_5271, 0xFF29_0242_C833_96CE), // 1e205
    (0x0F00_62C6_E984_D386, 0x9F79_A169_BD20_3E41), // 1e206
    (0x52C0_7B78_A3E6_0868, 0xC758_09C4_2C68_4DD1), // 1e207
    (0xA770_9A56_CCDF_8A82, 0xF92E_0C35_3782_6145), // 1e208
    (0x88A6_6076_400B_B691, 0x9BBC_C7A1_42B1_7CCB), // 1e209
    (0x6ACF_F893_D00E_A435, 0xC2AB_F989_935D_DBFE), // 1e210
    (0x0583_F6B8_C412_4D43, 0xF356_F7EB_F835_52FE), // 1e211
    (0xC372_7A33_7A8B_704A, 0x9816_5AF3_7B21_53DE), // 1e212
    (0x744F_18C0_592E_4C5C, 0xBE1B_F1B0_59E9_A8D6), // 1e213
    (0x1162_DEF0_6F79_DF73, 0xEDA2_EE1C_7064_130C), // 1e214
    (0x8ADD_CB56_45AC_2BA8, 0x9485_D4D1_C63E_8BE7), // 1e215
    (0x6D95_3E2B_D717_3692, 0xB9A7_4A06_37CE_2EE1), // 1e216
    (0xC8FA_8DB6_CCDD_0437, 0xE811_1C87_C5C1_BA99), // 1e217
    (0x1D9C_9892_400A_22A2, 0x910A_B1D4_DB99_14A0), // 1e218
    (0x2503_BEB6_D00C_AB4B, 0xB54D_5E4A_127F_59C8), // 1e219
    (0x2E44_AE64_840F_D61D, 0xE2A0_B5DC_971F_303A), // 1e220
    (0x5CEA_ECFE_D289_E5D2, 0x8DA4_71A9_DE73_7E24), // 1e221
    (0x7425_A83E_872C_5F47, 0xB10D_8E14_5610_5DAD), // 1e222
    (0xD12F_124E_28F7_7719, 0xDD50_F199_6B94_7518), // 1e223
    (0x82BD_6B70_D99A_AA6F, 0x8A52_96FF_E33C_C92F), // 1e224
    (0x636C_C64D_1001_550B, 0xACE7_3CBF_DC0B_FB7B), // 1e225
    (0x3C47_F7E0_5401_AA4E, 0xD821_0BEF_D30E_FA5A), // 1e226
    (0x65AC_FAEC_3481_0A71, 0x8714_A775_E3E9_5C78), // 1e227
    (0x7F18_39A7_41A1_4D0D, 0xA8D9_D153_5CE3_B396), // 1e228
    (0x1EDE_4811_1209_A050, 0xD310_45A8_341C_A07C), // 1e229
    (0x934A_ED0A_AB46_0432, 0x83EA_2B89_2091_E44D), // 1e230
    (0xF81D_A84D_5617_853F, 0xA4E4_B66B_68B6_5D60), // 1e231
    (0x3625_1260_AB9D_668E, 0xCE1D_E406_42E3_F4B9), // 1e232
    (0xC1D7_2B7C_6B42_6019, 0x80D2_AE83_E9CE_78F3), // 1e233
    (0xB24C_F65B_8612_F81F, 0xA107_5A24_E442_1730), // 1e234
    (0xDEE0_33F2_6797_B627, 0xC949_30AE_1D52_9CFC), // 1e235
    (0x1698_40EF_017D_A3B1, 0xFB9B_7CD9_A4A7_443C), // 1e236
    (0x8E1F_2895_60EE_864E, 0x9D41_2E08_06E8_8AA5), // 1e237
    (0xF1A6_F2BA_B92A_27E2, 0xC491_798A_08A2_AD4E), // 1e238
    (0xAE10_AF69_6774_B1DB, 0xF5B5_D7EC_8ACB_58A2), // 1e239
    (0xACCA_6DA1_E0A8_EF29, 0x9991_A6F3_D6BF_1765), // 1e240
    (0x17FD_090A_58D3_2AF3, 0xBFF6_10B0_CC6E_DD3F), // 1e241
    (0xDDFC_4B4C_EF07_F5B0, 0xEFF3_94DC_FF8A_948E), // 1e242
    (0x4ABD_AF10_1564_F98E, 0x95F8_3D0A_1FB6_9CD9), // 1e243
    (0x9D6D_1AD4_1ABE_37F1, 0xBB76_4C4C_A7A4_440F), // 1e244
    (0x84C8_6189_216D_C5ED, 0xEA53_DF5F_D18D_5513), // 1e245
    (0x32FD_3CF5_B4E4_9BB4, 0x9274_6B9B_E2F8_552C), // 1e246
    (0x3FBC_8C33_221D_C2A1, 0xB711_8682_DBB6_6A77), // 1e247
    (0x0FAB_AF3F_EAA5_334A, 0xE4D5_E823_92A4_0515), // 1e248
    (0x29CB_4D87_F2A7_400E, 0x8F05_B116_3BA6_832D), // 1e249
    (0x743E_20E9_EF51_1012, 0xB2C7_1D5B_CA90_23F8), // 1e250
    (0x914D_A924_6B25_5416, 0xDF78_E4B2_BD34_2CF6), // 1e251
    (0x1AD0_89B6_C2F7_548E, 0x8BAB_8EEF_B640_9C1A), // 1e252
    (0xA184_AC24_73B5_29B1, 0xAE96_72AB_A3D0_C320), // 1e253
    (0xC9E5_D72D_90A2_741E, 0xDA3C_0F56_8CC4_F3E8), // 1e254
    (0x7E2F_A67C_7A65_8892, 0x8865_8996_17FB_1871), // 1e255
    (0xDDBB_901B_98FE_EAB7, 0xAA7E_EBFB_9DF9_DE8D), // 1e256
    (0x552A_7422_7F3E_A565, 0xD51E_A6FA_8578_5631), // 1e257
    (0xD53A_8895_8F87_275F, 0x8533_285C_936B_35DE), // 1e258
    (0x8A89_2ABA_F368_F137, 0xA67F_F273_B846_0356), // 1e259
    (0x2D2B_7569_B043_2D85, 0xD01F_EF10_A657_842C), // 1e260
    (0x9C3B_2962_0E29_FC73, 0x8213_F56A_67F6_B29B), // 1e261
    (0x8349_F3BA_91B4_7B8F, 0xA298_F2C5_01F4_5F42), // 1e262
    (0x241C_70A9_3621_9A73, 0xCB3F_2F76_4271_7713), // 1e263
    (0xED23_8CD3_83AA_0110, 0xFE0E_FB53_D30D_D4D7), // 1e264
    (0xF436_3804_324A_40AA, 0x9EC9_5D14_63E8_A506), // 1e265
    (0xB143_C605_3EDC_D0D5, 0xC67B_B459_7CE2_CE48), // 1e266
    (0xDD94_B786_8E94_050A, 0xF81A_A16F_DC1B_81DA), // 1e267
    (0xCA7C_F2B4_191C_8326, 0x9B10_A4E5_E991_3128), // 1e268
    (0xFD1C_2F61_1F63_A3F0, 0xC1D4_CE1F_63F5_7D72), // 1e269
    (0xBC63_3B39_673C_8CEC, 0xF24A_01A7_3CF2_DCCF), // 1e270
    (0xD5BE_0503_E085_D813, 0x976E_4108_8617_CA01), // 1e271
    (0x4B2D_8644_D8A7_4E18, 0xBD49_D14A_A79D_BC82), // 1e272
    (0xDDF8_E7D6_0ED1_219E, 0xEC9C_459D_5185_2BA2), // 1e273
    (0xCABB_90E5_C942_B503, 0x93E1_AB82_52F3_3B45), // 1e274
    (0x3D6A_751F_3B93_6243, 0xB8DA_1662_E7B0_0A17), // 1e275
    (0x0CC5_1267_0A78_3AD4, 0xE710_9BFB_A19C_0C9D), // 1e276
    (0x27FB_2B80_668B_24C5, 0x906A_617D_4501_87E2), // 1e277
    (0xB1F9_F660_802D_EDF6, 0xB484_F9DC_9641_E9DA), // 1e278
    (0x5E78_73F8_A039_6973, 0xE1A6_3853_BBD2_6451), // 1e279
    (0xDB0B_487B_6423_E1E8, 0x8D07_E334_5563_7EB2), // 1e280
    (0x91CE_1A9A_3D2C_DA62, 0xB049_DC01_6ABC_5E5F), // 1e281
    (0x7641_A140_CC78_10FB, 0xDC5C_5301_C56B_75F7), // 1e282
    (0xA9E9_04C8_7FCB_0A9D, 0x89B9_B3E1_1B63_29BA), // 1e283
    (0x5463_45FA_9FBD_CD44, 0xAC28_20D9_623B_F429), // 1e284
    (0xA97C_1779_47AD_4095, 0xD732_290F_BACA_F133), // 1e285
    (0x49ED_8EAB_CCCC_485D, 0x867F_59A9_D4BE_D6C0), // 1e286
    (0x5C68_F256_BFFF_5A74, 0xA81F_3014_49EE_8C70), // 1e287
    (0x7383_2EEC_6FFF_3111, 0xD226_FC19_5C6A_2F8C), // 1e288
];
