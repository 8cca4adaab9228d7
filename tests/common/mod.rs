#![allow(dead_code)]

use ceffu::CustodyConfig;

/// Throwaway 2048-bit RSA key, PKCS#1 DER, base64-encoded: the format the
/// service issues keys in.
pub const TEST_PRIVATE_KEY_B64: &str = "\
MIIEowIBAAKCAQEAusWOHLStJrKzCcgpdLTgGozxv0GCqtOrDjvF0ukTOTy4MHaHWBwfWvKxP0EI\
LpT8823f305KwfZk/nzv2/90wiDSGeg5dKph3sfz0umI9vL/TZTGj1tu2oQy/719OQmnJ/52y3qT\
lIxHCivE3O0fsFXORPberm1VofdjCXi16cz8e++fExw9F/Bodq3pozoryuLyTq6GM/vYIdeaSPlj\
MXoaNI5GN46ynQPCwsPvEMHZpSPd2u3x6zJfd5H4fKi48oluSgyQNyhMEqgu4Ay79ZKGRhIlVkL4\
/x46Q4BpYKrsZaEVX+pFP61hGbY/idMO7+XI1KmUSZqPTYqSssqwkQIDAQABAoIBAA8xrh94tVNe\
G0GS9ohnhIm0aKBCAJLMGHDWfP/s9SLlZSiQI++Pjh90eeXm8Pb1KOTWze0ZLey8kje/yzWPAR0f\
1WfFJBNxHvgkNRo15G4Ok6VokoSsEAcX1RxH+o1u0xnmUhy4kpP1m3vg1qmQYtESEe87VB9Fhr9f\
5D8rgkUMQ9gpI6uix+p2PRlAndppYeWeyDgi6miafMgGF3dr3in4IHS1wjUW5D54CZ6bh+SHhVfB\
icSOh7AvQ1RHIFvOkXlY9IEHKtfRIRcXM6+kBK7NnA9HItkuG7enf/6+sYD978Pdqt8ajXYeVWbC\
LhsFtpnE8LJaac0fZ5o+DS8so+ECgYEA7IBfyfhl/EOcSm4ER3wScacn+AczDaLE60EOFl01yIHP\
l4To6///uAnDkI1R11Qy1vfjt/sqPSTQSCfs+UifuLjQf/smg6bQwINEnAn43Iqz7FAfEj5IsBpf\
eeUNbu905vZIa/Zrv7YUD8Ha0UXFeN8ob8SJ6k4FOIYZRlwwiAkCgYEAyiuUQhCI5i/EwtnWEU9P\
RyPRXG3LAhXpxLAOd60WI/kkMBsGRxb5fMdVzJ91elXnS4EnM8UyccgXEInwTeGqlkHRCtSwOpB8\
wy06rJrKm6aWiQQtUALsrU61BVtd9YkgSAsXUuvc2NBcbo6LRhD44prC2PDcEsbsYdDYrmayNkkC\
gYEAqGYMTtrhe4uE2PaXc3MkCus0KYau0pHI15598myyZDASadhIpeql4hyJtP77fHDGtozSB+n+\
vITfDdHoCeStXjGyvL5PQUThtYKCsvzix963mJfAWBQjW8mbnEb9lrVIr0BEdyOCu4JhrIqjTYn5\
v0RfHZ57eWvOid3qV1BDekkCgYAkISWdqNbOTDsdl1BqR4IjdIM1wWlGNiRQwiXTvVr3ks6kyi+V\
BMYRRo5OwzB7bF6pX6th1RvuuZNloUEQqgOSVrDE/r1/udKSDsMtlXwf1OWSFu0CH4OsdSRkkK95\
8ceTGGhSqVQOay4Zk9/P5biUxpOLsX+i22njES+n+zJeAQKBgB33Z/3cwKDbS25LtVOSRew6GdvW\
nAJPQJ/ISYoNHEg3MgxWgtWwkrcxUS84Ld8eMfTFrAFqwlk8ykGeQxMCgB8JzH5vz3UuxWEjHNB+\
KoqCQjU5TkjDKTrANDpmoYxE4WzNMlOgDN6833YD4jqypNKVOz19lkQ5AoF+1K8bqqyq";

/// The same key as [`TEST_PRIVATE_KEY_B64`], re-encoded as PKCS#8 DER.
pub const TEST_PRIVATE_KEY_PKCS8_B64: &str = "\
MIIEvQIBADANBgkqhkiG9w0BAQEFAASCBKcwggSjAgEAAoIBAQC6xY4ctK0msrMJyCl0tOAajPG/\
QYKq06sOO8XS6RM5PLgwdodYHB9a8rE/QQgulPzzbd/fTkrB9mT+fO/b/3TCINIZ6Dl0qmHex/PS\
6Yj28v9NlMaPW27ahDL/vX05Cacn/nbLepOUjEcKK8Tc7R+wVc5E9t6ubVWh92MJeLXpzPx7758T\
HD0X8Gh2remjOivK4vJOroYz+9gh15pI+WMxeho0jkY3jrKdA8LCw+8QwdmlI93a7fHrMl93kfh8\
qLjyiW5KDJA3KEwSqC7gDLv1koZGEiVWQvj/HjpDgGlgquxloRVf6kU/rWEZtj+J0w7v5cjUqZRJ\
mo9NipKyyrCRAgMBAAECggEADzGuH3i1U14bQZL2iGeEibRooEIAkswYcNZ8/+z1IuVlKJAj74+O\
H3R55ebw9vUo5NbN7Rkt7LySN7/LNY8BHR/VZ8UkE3Ee+CQ1GjXkbg6TpWiShKwQBxfVHEf6jW7T\
GeZSHLiSk/Wbe+DWqZBi0RIR7ztUH0WGv1/kPyuCRQxD2Ckjq6LH6nY9GUCd2mlh5Z7IOCLqaJp8\
yAYXd2veKfggdLXCNRbkPngJnpuH5IeFV8GJxI6HsC9DVEcgW86ReVj0gQcq19EhFxczr6QErs2c\
D0ci2S4bt6d//r6xgP3vw92q3xqNdh5VZsIuGwW2mcTwslppzR9nmj4NLyyj4QKBgQDsgF/J+GX8\
Q5xKbgRHfBJxpyf4BzMNosTrQQ4WXTXIgc+XhOjr//+4CcOQjVHXVDLW9+O3+yo9JNBIJ+z5SJ+4\
uNB/+yaDptDAg0ScCfjcirPsUB8SPkiwGl955Q1u73Tm9khr9mu/thQPwdrRRcV43yhvxInqTgU4\
hhlGXDCICQKBgQDKK5RCEIjmL8TC2dYRT09HI9FcbcsCFenEsA53rRYj+SQwGwZHFvl8x1XMn3V6\
VedLgSczxTJxyBcQifBN4aqWQdEK1LA6kHzDLTqsmsqbppaJBC1QAuytTrUFW131iSBICxdS69zY\
0FxujotGEPjimsLY8NwSxuxh0NiuZrI2SQKBgQCoZgxO2uF7i4TY9pdzcyQK6zQphq7SkcjXnn3y\
bLJkMBJp2Eil6qXiHIm0/vt8cMa2jNIH6f68hN8N0egJ5K1eMbK8vk9BROG1goKy/OLH3reYl8BY\
FCNbyZucRv2WtUivQER3I4K7gmGsiqNNifm/RF8dnnt5a86J3epXUEN6SQKBgCQhJZ2o1s5MOx2X\
UGpHgiN0gzXBaUY2JFDCJdO9WveSzqTKL5UExhFGjk7DMHtsXqlfq2HVG+65k2WhQRCqA5JWsMT+\
vX+50pIOwy2VfB/U5ZIW7QIfg6x1JGSQr3nxx5MYaFKpVA5rLhmT38/luJTGk4uxf6LbaeMRL6f7\
Ml4BAoGAHfdn/dzAoNtLbku1U5JF7DoZ29acAk9An8hJig0cSDcyDFaC1bCStzFRLzgt3x4x9MWs\
AWrCWTzKQZ5DEwKAHwnMfm/PdS7FYSMc0H4qioJCNTlOSMMpOsA0OmahjEThbM0yU6AM3rzfdgPi\
OrKk0pU7PX2WRDkCgX7UrxuqrKo=";

pub const TEST_API_KEY: &str = "test-api-key";

/// Route tracing output through the test harness; safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

pub fn test_config(base_url: &str) -> CustodyConfig {
    CustodyConfig::new(
        TEST_API_KEY.to_string(),
        TEST_PRIVATE_KEY_B64.to_string(),
    )
    .base_url(base_url.to_string())
}
